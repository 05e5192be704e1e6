//! Request validation and orchestration between the resolver, the grid and the search.

use crate::algorithms::{AStar, PathfindingAlgorithm};
use crate::error::{Endpoint, QueryError, Result};
use crate::grid::{Position, WalkabilityGrid};
use crate::resolver::RoomResolver;
use crate::rooms::RoomBlockRegistry;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// A validated route. `path` is empty when the two rooms are not connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: Vec<Position>,
    pub start_coords: Position,
    pub end_coords: Position,
}

impl Route {
    pub fn is_connected(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves, not cells.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Grid facts reported by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub rows: usize,
    pub cols: usize,
    pub degraded: bool,
    pub algorithm: &'static str,
}

/// Entry point for routing queries. Holds only read-only data, so one
/// instance is shared by every request.
pub struct QueryService {
    grid: Arc<WalkabilityGrid>,
    resolver: Arc<RoomResolver>,
    blocks: Arc<RoomBlockRegistry>,
    algorithm: Box<dyn PathfindingAlgorithm>,
}

impl QueryService {
    pub fn new(
        grid: Arc<WalkabilityGrid>,
        resolver: Arc<RoomResolver>,
        blocks: Arc<RoomBlockRegistry>,
    ) -> Self {
        Self::with_algorithm(grid, resolver, blocks, Box::new(AStar::new()))
    }

    pub fn with_algorithm(
        grid: Arc<WalkabilityGrid>,
        resolver: Arc<RoomResolver>,
        blocks: Arc<RoomBlockRegistry>,
        algorithm: Box<dyn PathfindingAlgorithm>,
    ) -> Self {
        let service = QueryService {
            grid,
            resolver,
            blocks,
            algorithm,
        };
        service.report_unreachable_rooms();
        service
    }

    fn report_unreachable_rooms(&self) {
        for (name, pos) in self.resolver.rooms().iter() {
            if !self.grid.in_bounds(pos) {
                warn!("Room {:?} at {} lies outside the {:?} grid", name, pos, self.grid.dimensions());
            } else if !self.grid.is_walkable(pos) {
                warn!("Room {:?} at {} is on a blocked cell; routes to it will be rejected", name, pos);
            }
        }
    }

    /// Validates both room names and searches for a route between them.
    ///
    /// Checks run in order and stop at the first failure: empty names, unknown
    /// rooms, then rooms whose cell is out of bounds or blocked.
    pub fn find_path(&self, current: &str, destination: &str) -> Result<Route> {
        if current.is_empty() {
            return Err(QueryError::MissingField(Endpoint::Current));
        }
        if destination.is_empty() {
            return Err(QueryError::MissingField(Endpoint::Destination));
        }

        let start = self.locate(Endpoint::Current, current)?;
        let end = self.locate(Endpoint::Destination, destination)?;
        self.ensure_walkable(Endpoint::Current, current, start)?;
        self.ensure_walkable(Endpoint::Destination, destination, end)?;

        let path = self
            .algorithm
            .find_path(&self.grid, start, end)
            .unwrap_or_default();
        debug!(
            "{} {} -> {} {}: {} cells via {}",
            current,
            start,
            destination,
            end,
            path.len(),
            self.algorithm.name()
        );

        Ok(Route {
            path,
            start_coords: start,
            end_coords: end,
        })
    }

    fn locate(&self, endpoint: Endpoint, name: &str) -> Result<Position> {
        self.resolver
            .resolve(name)
            .ok_or_else(|| QueryError::UnknownRoom {
                endpoint,
                name: name.to_string(),
            })
    }

    fn ensure_walkable(&self, endpoint: Endpoint, name: &str, position: Position) -> Result<()> {
        if self.grid.is_walkable(position) {
            Ok(())
        } else {
            Err(QueryError::UnwalkableLocation {
                endpoint,
                name: name.to_string(),
                position,
            })
        }
    }

    /// Registered room names in registration order.
    pub fn room_names(&self) -> Vec<String> {
        self.resolver.room_names().map(str::to_string).collect()
    }

    pub fn room_blocks(&self) -> &RoomBlockRegistry {
        &self.blocks
    }

    /// Free-text lookup for voice and typed input.
    pub fn match_room(&self, text: &str) -> Option<String> {
        self.resolver.resolve_fuzzy(text).map(str::to_string)
    }

    pub fn grid_summary(&self) -> GridSummary {
        let (rows, cols) = self.grid.dimensions();
        GridSummary {
            rows,
            cols,
            degraded: self.grid.is_degraded(),
            algorithm: self.algorithm.name(),
        }
    }
}
