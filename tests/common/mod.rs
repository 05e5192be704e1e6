#![allow(dead_code)]

use hospital_nav::{
    Position, QueryService, RoomBlockRegistry, RoomResolver, RoomsConfig, WalkabilityGrid,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::Arc;

/// `.` is walkable, anything else is blocked.
pub fn grid_from_ascii(rows: &[&str]) -> WalkabilityGrid {
    WalkabilityGrid::from_rows(
        rows.iter()
            .map(|r| r.chars().map(|c| c == '.').collect())
            .collect(),
    )
    .expect("rectangular test grid")
}

/// Random grid where each cell is blocked with probability `wall_ratio`.
pub fn random_grid(seed: u64, rows: usize, cols: usize, wall_ratio: f64) -> WalkabilityGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells = (0..rows)
        .map(|_| (0..cols).map(|_| !rng.gen_bool(wall_ratio)).collect())
        .collect();
    WalkabilityGrid::from_rows(cells).expect("rectangular random grid")
}

pub fn walkable_cells(grid: &WalkabilityGrid) -> Vec<Position> {
    let (rows, cols) = grid.dimensions();
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
        .filter(|p| grid.is_walkable(*p))
        .collect()
}

/// Brute-force shortest distance in moves, `None` when unreachable.
pub fn bfs_distance(grid: &WalkabilityGrid, start: Position, goal: Position) -> Option<usize> {
    let (rows, cols) = grid.dimensions();
    let mut dist = vec![usize::MAX; rows * cols];
    let mut queue = VecDeque::new();
    dist[start.row * cols + start.col] = 0;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        let d = dist[cell.row * cols + cell.col];
        if cell == goal {
            return Some(d);
        }
        let candidates = [
            (cell.row.wrapping_sub(1), cell.col),
            (cell.row + 1, cell.col),
            (cell.row, cell.col.wrapping_sub(1)),
            (cell.row, cell.col + 1),
        ];
        for (row, col) in candidates {
            if row >= rows || col >= cols {
                continue;
            }
            let next = Position::new(row, col);
            if grid.is_walkable(next) && dist[row * cols + col] == usize::MAX {
                dist[row * cols + col] = d + 1;
                queue.push_back(next);
            }
        }
    }
    None
}

/// Panics unless `path` is a contiguous walkable walk from `start` to `goal`.
pub fn assert_valid_path(grid: &WalkabilityGrid, path: &[Position], start: Position, goal: Position) {
    assert_eq!(path.first(), Some(&start), "path must begin at the start");
    assert_eq!(path.last(), Some(&goal), "path must end at the goal");
    for cell in path {
        assert!(grid.is_walkable(*cell), "{} is not walkable", cell);
    }
    for pair in path.windows(2) {
        assert_eq!(
            pair[0].manhattan(&pair[1]),
            1,
            "{} -> {} is not a single step",
            pair[0],
            pair[1]
        );
    }
}

/// Service over the built-in hospital rooms and the given grid.
pub fn hospital_service(grid: WalkabilityGrid) -> QueryService {
    let (rooms, blocks) = RoomsConfig::hospital()
        .into_registries()
        .expect("built-in tables are valid");
    QueryService::new(
        Arc::new(grid),
        Arc::new(RoomResolver::new(rooms)),
        Arc::new(blocks),
    )
}

pub fn empty_blocks() -> Arc<RoomBlockRegistry> {
    Arc::new(RoomBlockRegistry::default())
}
