//! Configuration for [`DpSolver`](crate::DpSolver).

/// Order in which the state table is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DpStrategy {
    /// Iterate visited sets from the full set downwards, so every successor
    /// state is computed before the states that depend on it. No recursion.
    #[default]
    BottomUp,
    /// Memoised recursion from the start state. Depth is bounded by the
    /// landmark count.
    TopDown,
}

/// Limits and strategy for [`DpSolver`](crate::DpSolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpSolverConfig {
    /// Table filling strategy.
    pub strategy: DpStrategy,
    /// Largest landmark count accepted, origin included. Values above
    /// [`MAX_MASK_WIDTH`](crate::MAX_MASK_WIDTH) are clamped to it.
    pub max_landmarks: usize,
    /// Ceiling on the bytes the state table may occupy.
    pub max_table_bytes: u64,
    /// Optional cap on the number of states evaluated in one solve.
    pub state_budget: Option<u64>,
}

impl Default for DpSolverConfig {
    fn default() -> Self {
        Self {
            strategy: DpStrategy::default(),
            max_landmarks: 20,
            max_table_bytes: 1 << 30,
            state_budget: None,
        }
    }
}
