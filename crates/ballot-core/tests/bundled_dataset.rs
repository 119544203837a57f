#![cfg(feature = "csv")]

use ballot_core::prelude::*;

fn store() -> &'static RecordStore {
    RecordStore::load().expect("bundled dataset loads")
}

#[test]
fn example_queries_all_find_ballots() {
    let store = store();
    for q in EXAMPLE_QUERIES {
        let hits = search_with_phase(store.ballots(), q);
        assert_eq!(hits.phase, MatchPhase::Structured, "query {q}");
        assert!(!hits.is_empty(), "query {q}");
    }
}

#[test]
fn shared_zip_returns_every_district() {
    let hits = search(store().ballots(), "Cook, Illinois (60629)");
    let titles: Vec<String> = hits.iter().map(|r| r.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Cook, Illinois － Congressional District 3",
            "Cook, Illinois － Congressional District 4",
        ]
    );
}

#[test]
fn partial_zip_in_structured_query_matches_by_substring() {
    let hits = search(store().ballots(), "Cook, Illinois (606)");
    assert_eq!(hits.len(), 3);
}

#[test]
fn zip_with_leading_zero_survives_loading() {
    let hits = search(store().ballots(), "02108");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].county(), "Suffolk");
}

#[test]
fn suggestion_index_dedups_lookup_rows() {
    let store = store();
    let index = SuggestionIndex::build(store.lookup());
    assert_eq!(index.len(), store.lookup().len() - 1);
    let cook: Vec<&str> = index.filter("Cook, Illinois (60629)", 5);
    assert_eq!(cook, vec!["Cook, Illinois (60629)"]);
}

#[test]
fn lookup_rows_without_ballots_search_to_nothing() {
    // Coos, Oregon is in the lookup table but has no ballot
    let hits = search(store().ballots(), "Coos, Oregon (97420)");
    assert!(hits.is_empty());
}

#[test]
fn empty_query_returns_the_whole_table() {
    let store = store();
    assert_eq!(search(store.ballots(), "").len(), store.ballots().len());
}

#[test]
fn keyboard_session_over_bundled_data() {
    let mut session = BallotSession::from_store(
        store().clone(),
        SearchConfig::default(),
        PlainText,
        Recorder::default(),
    );

    assert_eq!(session.handle(UiEvent::Input("co".into())), Transition::Shown);
    assert_eq!(session.controller().items().len(), 5);

    for _ in 0..10 {
        session.handle(UiEvent::Key(NavKey::Down));
    }
    assert_eq!(session.controller().selected_index(), Some(4));

    session.handle(UiEvent::Key(NavKey::Up));
    let picked = session.controller().selected_item().unwrap().to_owned();
    let t = session.handle(UiEvent::Key(NavKey::Enter));
    assert_eq!(t, Transition::Commit(picked.clone()));
    assert_eq!(session.controller().input(), picked);
}
