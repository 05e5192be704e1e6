use crate::algorithms::common::{PathResult, PathfindingAlgorithm};
use crate::grid::{Position, WalkabilityGrid};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;

/// Frontier entry. `BinaryHeap` is a max-heap, so `Ord` is reversed to pop
/// the lowest `f` first, and among equal `f` the earliest pushed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct QueueEntry {
    f: usize,
    seq: u64,
    g: usize,
    pos: Position,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.f.cmp(&self.f) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ord => ord,
        }
    }
}

/// A* over 4-connected unit-cost moves with the Manhattan heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }

    fn reconstruct(
        came_from: &FxHashMap<Position, Position>,
        start: Position,
        goal: Position,
    ) -> Vec<Position> {
        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            match came_from.get(&current) {
                Some(&prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

impl PathfindingAlgorithm for AStar {
    /// Each cell is expanded at most once. A neighbour is only queued when it
    /// improves on the best known cost to reach it, and the back-pointer is
    /// updated at the same time, so the first expansion of `goal` yields a
    /// minimal path.
    fn find_path(&self, grid: &WalkabilityGrid, start: Position, goal: Position) -> PathResult {
        let mut open = BinaryHeap::new();
        let mut closed: FxHashSet<Position> = FxHashSet::default();
        let mut best_g: FxHashMap<Position, usize> = FxHashMap::default();
        let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();
        let mut seq: u64 = 0;

        best_g.insert(start, 0);
        open.push(QueueEntry {
            f: start.manhattan(&goal),
            seq,
            g: 0,
            pos: start,
        });

        while let Some(QueueEntry { g, pos, .. }) = open.pop() {
            if pos == goal {
                trace!("A* reached {} after expanding {} cells", goal, closed.len());
                return Some(Self::reconstruct(&came_from, start, goal));
            }
            if !closed.insert(pos) {
                continue;
            }

            for next in grid.walkable_neighbors(pos) {
                if closed.contains(&next) {
                    continue;
                }
                let tentative = g + 1;
                if best_g.get(&next).is_some_and(|&known| known <= tentative) {
                    continue;
                }
                best_g.insert(next, tentative);
                came_from.insert(next, pos);
                seq += 1;
                open.push(QueueEntry {
                    f: tentative + next.manhattan(&goal),
                    seq,
                    g: tentative,
                    pos: next,
                });
            }
        }

        trace!("A* exhausted the frontier after expanding {} cells", closed.len());
        None
    }

    fn name(&self) -> &'static str {
        "a_star"
    }
}
