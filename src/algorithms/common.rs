use crate::grid::{Position, WalkabilityGrid};

/// Ordered cells from start to goal inclusive, or `None` when the goal is unreachable.
pub type PathResult = Option<Vec<Position>>;

/// Shortest-path search over a walkability grid.
///
/// Implementations keep all search state local to the call, so a single
/// instance can serve concurrent queries.
pub trait PathfindingAlgorithm: Send + Sync {
    /// Both `start` and `goal` must be in bounds and walkable; callers validate this.
    fn find_path(&self, grid: &WalkabilityGrid, start: Position, goal: Position) -> PathResult;

    fn name(&self) -> &'static str;
}
