use crate::error::SearchError;
use crate::game::{Game, Score};
use ego_tree::{NodeId, Tree};
use std::marker::PhantomData;
use tracing::{debug, instrument, warn};

/// How many plies the search may look ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    /// Stop after this many plies and score the position statically.
    Limited(u32),
    /// Search every line to the end of the game.
    Unbounded,
}

impl Depth {
    /// Whether no further plies may be searched.
    pub fn is_exhausted(self) -> bool {
        matches!(self, Depth::Limited(0))
    }

    /// The depth available one ply further down.
    pub fn deeper(self) -> Self {
        match self {
            Depth::Limited(plies) => Depth::Limited(plies.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

/// The chosen move and the score it guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// `None` when the root itself was terminal or the depth was zero.
    pub best_move: Option<M>,
    /// Minimax value of the root from the maximizing player's perspective.
    pub score: Score,
}

/// Counters collected during the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States visited, the root included.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped by alpha-beta.
    pub pruned: u64,
    /// Whether the node budget ran out and the search was cut short.
    pub budget_exhausted: bool,
}

/// One explored state in a recorded search trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceNode<M> {
    /// The move that led here from the parent. `None` for the root.
    pub prev_move: Option<M>,
    /// Distance from the root.
    pub ply: u32,
    /// Value backed up to this node.
    pub score: Score,
}

/// Depth-limited minimax search over any [`Game`].
///
/// The engine selects the first move, in the order given by
/// [`Game::get_available_moves`], that achieves the extremal score. Alpha-beta pruning
/// never changes that choice, only the amount of work.
pub struct Minimax<T: Game> {
    use_alpha_beta_pruning: bool,
    node_budget: Option<u64>,
    record_trace: bool,
    stats: SearchStats,
    trace: Option<Tree<TraceNode<T::Move>>>,
}

impl<T: Game> Default for Minimax<T> {
    fn default() -> Self {
        MinimaxBuilder::new().build()
    }
}

/// A builder for creating instances of [`Minimax`].
pub struct MinimaxBuilder<T: Game> {
    use_alpha_beta_pruning: bool,
    node_budget: Option<u64>,
    record_trace: bool,
    _game: PhantomData<T>,
}

impl<T: Game> Default for MinimaxBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Game> MinimaxBuilder<T> {
    /// Creates a builder with alpha-beta pruning on, no node budget and no trace.
    pub fn new() -> Self {
        Self {
            use_alpha_beta_pruning: true,
            node_budget: None,
            record_trace: false,
            _game: PhantomData,
        }
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Caps the number of visited states.
    ///
    /// Once the budget is spent every remaining state is scored as if the depth limit
    /// had been reached. The root is always expanded, so a move is still returned.
    pub fn with_node_budget(mut self, budget: Option<u64>) -> Self {
        self.node_budget = budget;
        self
    }

    /// Records the explored tree of the next searches. Costly on large trees.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Builds the [`Minimax`] instance with the configured parameters.
    pub fn build(self) -> Minimax<T> {
        Minimax {
            use_alpha_beta_pruning: self.use_alpha_beta_pruning,
            node_budget: self.node_budget,
            record_trace: self.record_trace,
            stats: SearchStats::default(),
            trace: None,
        }
    }
}

type Trace<M> = Option<Tree<TraceNode<M>>>;

impl<T: Game> Minimax<T> {
    /// Returns a new builder for `Minimax`.
    pub fn builder() -> MinimaxBuilder<T> {
        MinimaxBuilder::new()
    }

    /// Counters of the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The tree explored by the last search, if tracing is enabled.
    pub fn trace(&self) -> Option<&Tree<TraceNode<T::Move>>> {
        self.trace.as_ref()
    }

    /// Searches `state` and returns the best move for the side given by `maximizing`.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoLegalMoves`] if any non-terminal state reached during the
    /// search has no moves.
    #[instrument(level = "debug", skip(self, state))]
    pub fn search(
        &mut self,
        state: &T,
        depth: Depth,
        maximizing: bool,
    ) -> Result<SearchResult<T::Move>, SearchError> {
        self.stats = SearchStats::default();
        let mut trace: Trace<T::Move> = self.record_trace.then(|| {
            Tree::new(TraceNode {
                prev_move: None,
                ply: 0,
                score: 0,
            })
        });
        let root_id = trace.as_ref().map(|tree| tree.root().id());

        let (best_move, score) = self.minimax(
            state,
            depth,
            0,
            maximizing,
            Score::MIN,
            Score::MAX,
            &mut trace,
            root_id,
        )?;

        if let Some(tree) = trace.as_mut() {
            tree.root_mut().value().score = score;
        }
        self.trace = trace;

        debug!(
            nodes = self.stats.nodes,
            pruned = self.stats.pruned,
            score,
            "search finished"
        );
        Ok(SearchResult { best_move, score })
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        state: &T,
        depth: Depth,
        ply: u32,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        trace: &mut Trace<T::Move>,
        trace_id: Option<NodeId>,
    ) -> Result<(Option<T::Move>, Score), SearchError> {
        self.stats.nodes += 1;

        if state.is_terminal() || depth.is_exhausted() || self.budget_spent(ply) {
            return Ok((None, state.evaluate(ply)));
        }

        let moves = state.get_available_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves { ply });
        }

        let mut best_move = None;
        let mut best_score = if maximizing { Score::MIN } else { Score::MAX };

        for mv in moves {
            let mut child = state.clone();
            child.perform_move(&mv);

            let child_id = Self::record_child(trace, trace_id, &mv, ply + 1);
            let (_, score) = self.minimax(
                &child,
                depth.deeper(),
                ply + 1,
                !maximizing,
                alpha,
                beta,
                trace,
                child_id,
            )?;
            Self::record_score(trace, child_id, score);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }

            if self.use_alpha_beta_pruning {
                if maximizing {
                    alpha = alpha.max(best_score);
                } else {
                    beta = beta.min(best_score);
                }
                if alpha >= beta {
                    self.stats.pruned += 1;
                    break;
                }
            }
        }

        Ok((best_move, best_score))
    }

    fn budget_spent(&mut self, ply: u32) -> bool {
        let Some(budget) = self.node_budget else {
            return false;
        };
        if ply == 0 || self.stats.nodes <= budget {
            return false;
        }
        if !self.stats.budget_exhausted {
            warn!(budget, "node budget exhausted, scoring remaining states statically");
            self.stats.budget_exhausted = true;
        }
        true
    }

    fn record_child(
        trace: &mut Trace<T::Move>,
        parent: Option<NodeId>,
        mv: &T::Move,
        ply: u32,
    ) -> Option<NodeId> {
        let tree = trace.as_mut()?;
        let mut parent = tree.get_mut(parent?)?;
        let child = parent.append(TraceNode {
            prev_move: Some(mv.clone()),
            ply,
            score: 0,
        });
        Some(child.id())
    }

    fn record_score(trace: &mut Trace<T::Move>, id: Option<NodeId>, score: Score) {
        if let (Some(tree), Some(id)) = (trace.as_mut(), id) {
            if let Some(mut node) = tree.get_mut(id) {
                node.value().score = score;
            }
        }
    }
}
