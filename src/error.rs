//! Error types for hospital navigation

use crate::grid::Position;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the walkability matrix.
///
/// Never reaches a request caller: the grid store swaps in the fallback grid
/// and logs the cause instead.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("cannot read grid file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("grid source contains no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell {value:?} at row {row}, column {col} (expected 0 or 1)")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("grid shape rejected: {0}")]
    Shape(String),
}

/// Failure to load an operator-supplied room table.
#[derive(Error, Debug)]
pub enum RoomConfigError {
    #[error("cannot read rooms file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rooms file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("room entry {index} has an empty name")]
    EmptyName { index: usize },

    #[error("room {0:?} is registered more than once")]
    DuplicateRoom(String),
}

/// Which side of a routing request a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Current,
    Destination,
}

impl Endpoint {
    /// Request field name for this endpoint.
    pub fn field(self) -> &'static str {
        match self {
            Endpoint::Current => "currentLocation",
            Endpoint::Destination => "destination",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Current => write!(f, "start point"),
            Endpoint::Destination => write!(f, "end point"),
        }
    }
}

/// Routing request rejected before the search runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("missing current location or destination in request (`{}` is empty)", .0.field())]
    MissingField(Endpoint),

    #[error("unknown room {name:?} for {endpoint}, please check spelling")]
    UnknownRoom { endpoint: Endpoint, name: String },

    #[error("{endpoint} {name:?} ({position}) is not a walkable location on the map")]
    UnwalkableLocation {
        endpoint: Endpoint,
        name: String,
        position: Position,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
