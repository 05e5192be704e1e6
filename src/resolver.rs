use crate::grid::Position;
use crate::rooms::{normalize_name, RoomRegistry};

/// Turns user-supplied room text into registry names and coordinates.
#[derive(Debug, Clone)]
pub struct RoomResolver {
    rooms: RoomRegistry,
}

impl RoomResolver {
    pub fn new(rooms: RoomRegistry) -> Self {
        RoomResolver { rooms }
    }

    /// Case-insensitive exact lookup. Surrounding whitespace is not stripped,
    /// so `" entrance "` is not a room.
    pub fn resolve(&self, name: &str) -> Option<Position> {
        self.rooms.get(&name.to_lowercase())
    }

    /// Best-effort match for free text such as speech transcripts.
    ///
    /// Tries an exact key first, then returns the first registered room where
    /// either string contains the other. Ties go to registration order, so with
    /// rooms "lab" and "pathology lab" the query "lab" picks whichever was
    /// registered first. Blank text is a substring of every name and so
    /// matches the first registered room.
    pub fn resolve_fuzzy(&self, text: &str) -> Option<&str> {
        let needle = normalize_name(text);
        if let Some((name, _)) = self.rooms.iter().find(|(name, _)| *name == needle) {
            return Some(name);
        }
        self.rooms
            .names()
            .find(|name| name.contains(needle.as_str()) || needle.contains(*name))
    }

    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.names()
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::RoomEntry;

    fn resolver(names: &[&str]) -> RoomResolver {
        let entries = names.iter().enumerate().map(|(i, name)| RoomEntry {
            name: name.to_string(),
            coords: Position::new(i, i),
        });
        RoomResolver::new(RoomRegistry::from_entries(entries).unwrap())
    }

    #[test]
    fn exact_match_beats_earlier_substring_match() {
        let r = resolver(&["pathology lab", "lab"]);
        assert_eq!(r.resolve_fuzzy("LAB"), Some("lab"));
    }

    #[test]
    fn first_registered_substring_match_wins() {
        let r = resolver(&["pathology lab", "language lab"]);
        assert_eq!(r.resolve_fuzzy("lab"), Some("pathology lab"));
    }

    #[test]
    fn blank_text_matches_first_registered_room() {
        let r = resolver(&["waiting room", "ramp"]);
        assert_eq!(r.resolve_fuzzy(""), Some("waiting room"));
        assert_eq!(r.resolve_fuzzy("   "), Some("waiting room"));
    }

    #[test]
    fn exact_lookup_keeps_surrounding_whitespace() {
        let r = resolver(&["entrance"]);
        assert_eq!(r.resolve("Entrance"), Some(Position::new(0, 0)));
        assert_eq!(r.resolve(" entrance "), None);
    }
}
