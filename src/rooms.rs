//! Room metadata: walkable anchor coordinates and display blocks.

use crate::error::RoomConfigError;
use crate::grid::Position;
use rustc_hash::FxHashMap;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Display rectangle in grid units, serialised as `[row_start, col_start, height, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(usize, usize, usize, usize)",
    into = "(usize, usize, usize, usize)"
)]
pub struct RoomBlock {
    pub row_start: usize,
    pub col_start: usize,
    pub height: usize,
    pub width: usize,
}

impl From<(usize, usize, usize, usize)> for RoomBlock {
    fn from((row_start, col_start, height, width): (usize, usize, usize, usize)) -> Self {
        RoomBlock {
            row_start,
            col_start,
            height,
            width,
        }
    }
}

impl From<RoomBlock> for (usize, usize, usize, usize) {
    fn from(b: RoomBlock) -> Self {
        (b.row_start, b.col_start, b.height, b.width)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomEntry {
    pub name: String,
    pub coords: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockEntry {
    pub name: String,
    pub rect: RoomBlock,
}

/// Room tables as written in a rooms TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomsConfig {
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
    #[serde(default)]
    pub blocks: Vec<BlockEntry>,
}

impl RoomsConfig {
    pub fn load(path: &Path) -> Result<Self, RoomConfigError> {
        let text = fs::read_to_string(path).map_err(|source| RoomConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, RoomConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The ground floor of the hospital the service was built for.
    pub fn hospital() -> Self {
        let rooms: [(&str, (usize, usize)); 19] = [
            ("waiting room", (40, 24)),
            ("nurse duty", (45, 40)),
            ("lady doctor room", (49, 38)),
            ("pharmacy", (49, 36)),
            ("drinking water", (21, 39)),
            ("entrance", (41, 14)),
            ("homeo room", (30, 22)),
            ("medical officers room", (30, 29)),
            ("registration room", (27, 34)),
            ("reception", (39, 28)),
            ("pathology lab", (41, 36)),
            ("washroom1", (27, 35)),
            ("washroom2", (29, 35)),
            ("labour room", (47, 44)),
            ("gynaecologist specialist", (47, 46)),
            ("recovery room", (48, 45)),
            ("dressing", (37, 40)),
            ("general ward", (37, 45)),
            ("ramp", (46, 17)),
        ];
        let blocks: [(&str, (usize, usize, usize, usize)); 19] = [
            ("reception", (36, 29, 4, 3)),
            ("waiting room", (40, 21, 12, 7)),
            ("pharmacy", (46, 28, 6, 7)),
            ("lady doctor\n room", (44, 35, 8, 4)),
            ("pathology lab", (40, 28, 6, 7)),
            ("general ward", (28, 45, 10, 7)),
            ("labour room", (38, 42, 8, 10)),
            ("recovery room", (49, 42, 3, 4)),
            ("washroom1", (23, 35, 4, 6)),
            ("washroom2", (29, 35, 3, 8)),
            ("homeo\n room", (23, 22, 5, 3)),
            ("medical\nofficers\nroom", (23, 25, 5, 3)),
            ("registration\n room", (23, 28, 5, 5)),
            ("nurse \nduty", (39, 35, 3, 4)),
            ("dressing", (33, 35, 5, 5)),
            ("gynaecologist\n specialist", (46, 46, 6, 6)),
            ("ramp", (48, 13, 4, 8)),
            ("entrance", (39, 10, 5, 4)),
            ("drinking \nwater", (19, 39, 4, 3)),
        ];

        RoomsConfig {
            rooms: rooms
                .into_iter()
                .map(|(name, coords)| RoomEntry {
                    name: name.to_string(),
                    coords: coords.into(),
                })
                .collect(),
            blocks: blocks
                .into_iter()
                .map(|(name, rect)| BlockEntry {
                    name: name.to_string(),
                    rect: rect.into(),
                })
                .collect(),
        }
    }

    /// Splits the tables into their read-only registries.
    pub fn into_registries(self) -> Result<(RoomRegistry, RoomBlockRegistry), RoomConfigError> {
        let rooms = RoomRegistry::from_entries(self.rooms)?;
        let blocks = RoomBlockRegistry::from_entries(self.blocks);
        Ok((rooms, blocks))
    }
}

/// Lowercased, trimmed form used for registry keys and lookups.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalised room name to coordinate. Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    entries: Vec<(String, Position)>,
    index: FxHashMap<String, usize>,
}

impl RoomRegistry {
    pub fn from_entries<I>(entries: I) -> Result<Self, RoomConfigError>
    where
        I: IntoIterator<Item = RoomEntry>,
    {
        let mut registry = RoomRegistry::default();
        for (i, entry) in entries.into_iter().enumerate() {
            let key = normalize_name(&entry.name);
            if key.is_empty() {
                return Err(RoomConfigError::EmptyName { index: i });
            }
            if registry.contains(&key) {
                return Err(RoomConfigError::DuplicateRoom(key));
            }
            registry.index.insert(key.clone(), registry.entries.len());
            registry.entries.push((key, entry.coords));
        }
        Ok(registry)
    }

    /// Lookup by an already normalised key.
    pub fn get(&self, key: &str) -> Option<Position> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> {
        self.entries.iter().map(|(name, pos)| (name.as_str(), *pos))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Display label to rectangle, for front-end rendering only.
///
/// Serialises as a JSON object in registration order.
#[derive(Debug, Clone, Default)]
pub struct RoomBlockRegistry {
    blocks: Vec<(String, RoomBlock)>,
}

impl RoomBlockRegistry {
    /// Later entries with a repeated label replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = BlockEntry>,
    {
        let mut blocks: Vec<(String, RoomBlock)> = Vec::new();
        for entry in entries {
            match blocks.iter().position(|(name, _)| *name == entry.name) {
                Some(i) => blocks[i].1 = entry.rect,
                None => blocks.push((entry.name, entry.rect)),
            }
        }
        RoomBlockRegistry { blocks }
    }

    pub fn get(&self, name: &str) -> Option<RoomBlock> {
        self.blocks
            .iter()
            .find(|(label, _)| label == name)
            .map(|(_, block)| *block)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Serialize for RoomBlockRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.blocks.iter().map(|(name, block)| (name, block)))
    }
}
