//! Indoor navigation for a fixed hospital floor plan.
//!
//! Room names resolve to cells of an immutable walkability grid and A*
//! finds a shortest 4-connected walk between them. Everything is built once
//! at startup and shared read-only across requests.

pub mod algorithms;
pub mod api;
pub mod config;
pub mod error;
pub mod grid;
pub mod resolver;
pub mod rooms;
pub mod service;

pub use algorithms::{AStar, Algorithm, BreadthFirst, PathResult, PathfindingAlgorithm};
pub use error::{ConfigLoadError, Endpoint, QueryError, RoomConfigError};
pub use grid::{Position, WalkabilityGrid};
pub use resolver::RoomResolver;
pub use rooms::{RoomBlock, RoomBlockRegistry, RoomRegistry, RoomsConfig};
pub use service::{QueryService, Route};
