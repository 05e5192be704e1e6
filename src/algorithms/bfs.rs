use crate::algorithms::common::{PathResult, PathfindingAlgorithm};
use crate::grid::{Position, WalkabilityGrid};
use pathfinding::prelude::bfs;

/// Breadth-first search using the `pathfinding` crate.
///
/// Every move costs the same, so this is optimal too; it just explores more
/// cells than A* on open floors.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl PathfindingAlgorithm for BreadthFirst {
    fn find_path(&self, grid: &WalkabilityGrid, start: Position, goal: Position) -> PathResult {
        bfs(
            &start,
            |p| grid.walkable_neighbors(*p).collect::<Vec<_>>(),
            |p| *p == goal,
        )
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}
