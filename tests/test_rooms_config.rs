use hospital_nav::{Position, RoomConfigError, RoomsConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_room_tables_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rooms.toml");
    fs::write(
        &path,
        r#"
[[rooms]]
name = "Radiology"
coords = [10, 4]

[[rooms]]
name = "ICU"
coords = [3, 9]

[[blocks]]
name = "radiology\nwing"
rect = [8, 2, 4, 5]
"#,
    )
    .unwrap();

    let (rooms, blocks) = RoomsConfig::load(&path).unwrap().into_registries().unwrap();
    assert_eq!(rooms.names().collect::<Vec<_>>(), vec!["radiology", "icu"]);
    assert_eq!(rooms.get("icu"), Some(Position::new(3, 9)));
    assert_eq!(blocks.len(), 1);
    assert!(blocks.get("radiology\nwing").is_some());
}

#[test]
fn unreadable_rooms_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = RoomsConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, RoomConfigError::Io { .. }));
}

#[test]
fn duplicate_rooms_in_file_are_rejected() {
    let config = RoomsConfig::from_toml(
        "[[rooms]]\nname = \"Lab\"\ncoords = [1, 1]\n[[rooms]]\nname = \"lab \"\ncoords = [2, 2]\n",
    )
    .unwrap();
    assert!(matches!(
        config.into_registries(),
        Err(RoomConfigError::DuplicateRoom(_))
    ));
}
