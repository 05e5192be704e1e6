use crate::error::ConfigLoadError;
use pathfinding::matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Rows and columns of the grid used when the walkability matrix cannot be loaded.
pub const FALLBACK_SIZE: usize = 60;

/// A grid cell address, `row` is Y and `col` is X.
///
/// Serialises as the two-element sequence `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance, the A* heuristic for 4-connected unit-cost moves.
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Where the loaded matrix came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    File(PathBuf),
    Inline,
    /// Degraded mode: the configured file was missing or malformed.
    Fallback,
}

/// Immutable walkability matrix: `true` cells are walkable.
#[derive(Debug, Clone)]
pub struct WalkabilityGrid {
    cells: Matrix<bool>,
    source: GridSource,
}

impl WalkabilityGrid {
    /// Reads a delimited 0/1 matrix from `path`.
    pub fn load(path: &Path, delimiter: char) -> Result<Self, ConfigLoadError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut grid = Self::parse(&text, delimiter)?;
        grid.source = GridSource::File(path.to_path_buf());
        Ok(grid)
    }

    /// Loads `path`, substituting the all-walkable fallback grid on any failure.
    pub fn load_or_fallback(path: &Path, delimiter: char) -> Self {
        match Self::load(path, delimiter) {
            Ok(grid) => {
                let (rows, cols) = grid.dimensions();
                info!("Walkability matrix loaded from {:?} ({}x{})", path, rows, cols);
                grid
            }
            Err(e) => {
                warn!("{}", e);
                warn!(
                    "Using a {}x{} all-walkable grid; routes ignore walls until the matrix is fixed",
                    FALLBACK_SIZE, FALLBACK_SIZE
                );
                Self::fallback()
            }
        }
    }

    /// Fully walkable `FALLBACK_SIZE` x `FALLBACK_SIZE` grid.
    pub fn fallback() -> Self {
        WalkabilityGrid {
            cells: Matrix::new(FALLBACK_SIZE, FALLBACK_SIZE, true),
            source: GridSource::Fallback,
        }
    }

    /// Parses delimited text. Blank lines and `#` comment lines are skipped.
    pub fn parse(text: &str, delimiter: char) -> Result<Self, ConfigLoadError> {
        let mut values = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let start = values.len();
            for (col, field) in line.split(delimiter).enumerate() {
                let walkable = match field.trim() {
                    "1" => true,
                    "0" => false,
                    other => {
                        return Err(ConfigLoadError::InvalidCell {
                            row: rows,
                            col,
                            value: other.to_string(),
                        })
                    }
                };
                values.push(walkable);
            }

            let found = values.len() - start;
            if rows == 0 {
                cols = found;
            } else if found != cols {
                return Err(ConfigLoadError::Ragged {
                    row: rows,
                    expected: cols,
                    found,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(ConfigLoadError::Empty);
        }

        let cells = Matrix::from_vec(rows, cols, values)
            .map_err(|e| ConfigLoadError::Shape(format!("{:?}", e)))?;
        Ok(WalkabilityGrid {
            cells,
            source: GridSource::Inline,
        })
    }

    /// Builds a grid from rows of booleans, mainly for synthetic maps.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigLoadError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ConfigLoadError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ConfigLoadError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }

        let cells = Matrix::from_vec(height, width, rows.into_iter().flatten().collect())
            .map_err(|e| ConfigLoadError::Shape(format!("{:?}", e)))?;
        Ok(WalkabilityGrid {
            cells,
            source: GridSource::Inline,
        })
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cells.rows, self.cells.columns)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.cells.rows && pos.col < self.cells.columns
    }

    /// Out-of-bounds positions are simply not walkable.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.cells.get((pos.row, pos.col)).copied().unwrap_or(false)
    }

    pub fn source(&self) -> &GridSource {
        &self.source
    }

    pub fn is_degraded(&self) -> bool {
        self.source == GridSource::Fallback
    }

    /// Walkable 4-connected neighbours, always in up, down, left, right order.
    pub fn walkable_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let up = pos.row.checked_sub(1).map(|row| Position::new(row, pos.col));
        let down = Some(Position::new(pos.row + 1, pos.col));
        let left = pos.col.checked_sub(1).map(|col| Position::new(pos.row, col));
        let right = Some(Position::new(pos.row, pos.col + 1));

        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(move |next| self.is_walkable(*next))
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        let (rows, cols) = self.dimensions();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
            .filter(|pos| self.is_walkable(*pos))
            .count()
    }
}
