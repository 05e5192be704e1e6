pub mod a_star;
pub mod bfs;
pub mod common;

pub use a_star::AStar;
pub use bfs::BreadthFirst;
pub use common::{PathResult, PathfindingAlgorithm};

use clap::ValueEnum;

/// Search strategy selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    AStar,
    Bfs,
}

impl Algorithm {
    pub fn build(self) -> Box<dyn PathfindingAlgorithm> {
        match self {
            Algorithm::AStar => Box::new(AStar::new()),
            Algorithm::Bfs => Box::new(BreadthFirst::new()),
        }
    }
}
