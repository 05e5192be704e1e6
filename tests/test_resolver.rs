use hospital_nav::{Position, RoomResolver, RoomsConfig};

fn hospital_resolver() -> RoomResolver {
    let (rooms, _) = RoomsConfig::hospital().into_registries().unwrap();
    RoomResolver::new(rooms)
}

#[test]
fn exact_lookup_ignores_case() {
    let resolver = hospital_resolver();
    assert_eq!(resolver.resolve("Reception"), Some(Position::new(39, 28)));
    assert_eq!(resolver.resolve("reception"), resolver.resolve("RECEPTION"));
}

#[test]
fn unknown_rooms_are_not_found() {
    let resolver = hospital_resolver();
    assert_eq!(resolver.resolve("nonexistent room"), None);
    assert_eq!(resolver.resolve("pharm"), None);
}

#[test]
fn fuzzy_match_accepts_exact_names() {
    let resolver = hospital_resolver();
    assert_eq!(resolver.resolve_fuzzy("  General Ward "), Some("general ward"));
}

#[test]
fn fuzzy_match_finds_partial_names() {
    let resolver = hospital_resolver();
    assert_eq!(resolver.resolve_fuzzy("pharm"), Some("pharmacy"));
    assert_eq!(resolver.resolve_fuzzy("take me to the pharmacy please"), Some("pharmacy"));
}

#[test]
fn fuzzy_ties_go_to_registration_order() {
    let resolver = hospital_resolver();
    // "waiting room" is registered before every other "... room"
    assert_eq!(resolver.resolve_fuzzy("room"), Some("waiting room"));
    assert_eq!(resolver.resolve_fuzzy("washroom"), Some("washroom1"));
}

#[test]
fn blank_fuzzy_text_picks_the_first_registered_room() {
    let resolver = hospital_resolver();
    assert_eq!(resolver.resolve_fuzzy(""), Some("waiting room"));
}

#[test]
fn exact_lookup_does_not_trim() {
    let resolver = hospital_resolver();
    assert_eq!(resolver.resolve(" entrance "), None);
    assert_eq!(resolver.resolve("ENTRANCE"), Some(Position::new(41, 14)));
}

#[test]
fn fuzzy_match_gives_up_on_unrelated_text() {
    let resolver = hospital_resolver();
    assert_eq!(resolver.resolve_fuzzy("cafeteria"), None);
}

#[test]
fn room_names_follow_registration_order() {
    let resolver = hospital_resolver();
    let names: Vec<_> = resolver.room_names().collect();
    assert_eq!(names.len(), 19);
    assert_eq!(names[0], "waiting room");
    assert_eq!(names[18], "ramp");
}
