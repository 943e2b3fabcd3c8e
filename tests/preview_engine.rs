//! End-to-end properties of the filter/sort/section engine.

use std::collections::{BTreeSet, HashMap};

use conpreview::catalog;
use conpreview::logic::build_sections;
use conpreview::state::{
    Company, FilterConfig, FilterTextTarget, Game, SortMode, UserSelection,
};

fn game(item_id: u64, name: &str) -> Game {
    Game {
        item_id,
        object_id: item_id + 1000,
        name: name.to_string(),
        location: None,
        status: "forsale".to_string(),
        user_selection: None,
    }
}

fn located_game(item_id: u64, name: &str, location: &str) -> Game {
    Game {
        location: Some(location.to_string()),
        ..game(item_id, name)
    }
}

fn company(id: u64, name: &str, location: &str, ids: &[u64]) -> Company {
    Company {
        id,
        name: name.to_string(),
        location: location.to_string(),
        thumbnail: String::new(),
        preview_item_ids: ids.to_vec(),
    }
}

fn overlay(entries: &[(u64, i32, &str)]) -> HashMap<u64, UserSelection> {
    entries
        .iter()
        .map(|&(id, priority, notes)| {
            (
                id,
                UserSelection {
                    priority,
                    notes: notes.to_string(),
                },
            )
        })
        .collect()
}

/// Two games under one company, one orphan, one annotated; used by several
/// properties below.
fn fixture() -> (Vec<Game>, Vec<Company>, HashMap<u64, UserSelection>) {
    let games = vec![
        game(10, "Zephyr Strike"),
        game(11, "Azul"),
        game(20, "Orphaned Game"),
    ];
    let companies = vec![
        company(1, "Stonemaier", "B-20", &[10, 11]),
        company(2, "Empty Shell", "A-5", &[]),
    ];
    let selections = overlay(&[(11, 1, r#"{"text":"looked great","seen":true}"#)]);
    (games, companies, selections)
}

#[test]
fn build_is_idempotent() {
    let (games, companies, selections) = fixture();
    let filters = FilterConfig::permissive();

    let first = build_sections(
        &games,
        &companies,
        &selections,
        &filters,
        SortMode::PublisherGame,
    );
    let second = build_sections(
        &games,
        &companies,
        &selections,
        &filters,
        SortMode::PublisherGame,
    );
    assert_eq!(first, second);
}

#[test]
fn games_partition_across_sections() {
    let (games, mut companies, selections) = fixture();
    // Two companies both claim item 10; it must land exactly once.
    companies.push(company(3, "Claim Jumper", "C-9", &[10]));

    let built = build_sections(
        &games,
        &companies,
        &selections,
        &FilterConfig::permissive(),
        SortMode::PublisherGame,
    );
    let mut seen_ids: Vec<u64> = built
        .sections
        .iter()
        .flat_map(|s| s.data.iter().map(|g| g.item_id))
        .collect();
    let total = seen_ids.len();
    seen_ids.sort_unstable();
    seen_ids.dedup();
    assert_eq!(seen_ids.len(), total, "a game appeared in two sections");
    assert_eq!(built.game_count, total);
}

#[test]
fn full_universe_equals_empty_selection() {
    let (games, companies, selections) = fixture();

    let empty = FilterConfig::permissive();
    let mut full = FilterConfig::permissive();
    full.priorities = catalog::PRIORITY_CHOICES.into_iter().collect();
    full.halls = catalog::HALL_CODES.into_iter().collect();
    full.seen = catalog::SEEN_CHOICES.into_iter().collect();
    full.availability = catalog::AVAILABILITY_STATUSES
        .into_iter()
        .map(str::to_string)
        .collect();

    let a = build_sections(
        &games,
        &companies,
        &selections,
        &empty,
        SortMode::PublisherGame,
    );
    let b = build_sections(
        &games,
        &companies,
        &selections,
        &full,
        SortMode::PublisherGame,
    );
    assert_eq!(a, b);
}

#[test]
fn no_section_is_ever_empty() {
    let (games, companies, selections) = fixture();
    let mut filters = FilterConfig::permissive();
    filters.name = "azul".into();

    let built = build_sections(
        &games,
        &companies,
        &selections,
        &filters,
        SortMode::PublisherGame,
    );
    assert!(built.sections.iter().all(|s| !s.data.is_empty()));
}

#[test]
fn orphaned_games_trigger_missing_companies() {
    let games = vec![game(10, "Azul"), game(20, "Orphan")];
    let companies = vec![company(1, "Alpha", "A-1", &[10])];

    let built = build_sections(
        &games,
        &companies,
        &HashMap::new(),
        &FilterConfig::permissive(),
        SortMode::PublisherGame,
    );
    assert_eq!(built.game_count, 1);
    assert!(built.missing_companies);
}

#[test]
fn seen_filter_only_restricts_single_selection() {
    let (games, companies, selections) = fixture();

    let unrestricted = build_sections(
        &games,
        &companies,
        &selections,
        &FilterConfig::permissive(),
        SortMode::PublisherGame,
    );

    let mut both = FilterConfig::permissive();
    both.seen = BTreeSet::from([0, 1]);
    assert_eq!(
        build_sections(&games, &companies, &selections, &both, SortMode::PublisherGame),
        unrestricted
    );

    let mut only_seen = FilterConfig::permissive();
    only_seen.seen = BTreeSet::from([1]);
    let built = build_sections(
        &games,
        &companies,
        &selections,
        &only_seen,
        SortMode::PublisherGame,
    );
    let names: Vec<&str> = built
        .sections
        .iter()
        .flat_map(|s| s.data.iter().map(|g| g.name.as_str()))
        .collect();
    assert_eq!(names, vec!["Azul"]);
}

#[test]
fn hall_filter_matches_location_prefix() {
    let games = vec![located_game(10, "Azul", "A-12")];
    let companies = vec![company(1, "Alpha", "A-12", &[10])];

    let mut in_a = FilterConfig::permissive();
    in_a.halls = BTreeSet::from(['A']);
    let kept = build_sections(
        &games,
        &companies,
        &HashMap::new(),
        &in_a,
        SortMode::PublisherGame,
    );
    assert_eq!(kept.game_count, 1);

    let mut in_b = FilterConfig::permissive();
    in_b.halls = BTreeSet::from(['B']);
    let dropped = build_sections(
        &games,
        &companies,
        &HashMap::new(),
        &in_b,
        SortMode::PublisherGame,
    );
    assert_eq!(dropped.game_count, 0);
    assert!(dropped.sections.is_empty());
}

#[test]
fn sort_mode_reorders_sections_by_location() {
    // Name order and location order deliberately disagree.
    let games = vec![game(10, "One"), game(20, "Two")];
    let companies = vec![
        company(1, "Zeta", "A", &[10]),
        company(2, "Alpha", "B", &[20]),
    ];

    let by_name = build_sections(
        &games,
        &companies,
        &HashMap::new(),
        &FilterConfig::permissive(),
        SortMode::PublisherGame,
    );
    let names: Vec<&str> = by_name.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);

    let by_location = build_sections(
        &games,
        &companies,
        &HashMap::new(),
        &FilterConfig::permissive(),
        SortMode::LocationPublisherGame,
    );
    let names: Vec<&str> = by_location
        .sections
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn note_targeted_text_filter_reads_overlay() {
    let (games, companies, selections) = fixture();
    let mut filters = FilterConfig::permissive();
    filters.name = "looked great".into();
    filters.filter_text_on = FilterTextTarget::Note;

    let built = build_sections(
        &games,
        &companies,
        &selections,
        &filters,
        SortMode::PublisherGame,
    );
    assert_eq!(built.game_count, 1);
    assert_eq!(built.sections[0].data[0].name, "Azul");
}

#[test]
fn publisher_targeted_text_filter_disables_missing_detection() {
    let games = vec![game(10, "Azul"), game(20, "Orphan")];
    let companies = vec![company(1, "Alpha", "A-1", &[10]), company(2, "Beta", "B-1", &[])];

    let mut filters = FilterConfig::permissive();
    filters.name = "alpha".into();
    filters.filter_text_on = FilterTextTarget::Publisher;

    let built = build_sections(
        &games,
        &companies,
        &HashMap::new(),
        &filters,
        SortMode::PublisherGame,
    );
    // Orphan is still unmatched, but the company set was narrowed by the
    // user, so the shortfall is not reported.
    assert!(!built.missing_companies);
    assert_eq!(built.game_count, 1);
}
