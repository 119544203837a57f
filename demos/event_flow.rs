//! Event flow example for ballotdb-rs
//!
//! Drives a search box session the way a page would: data arrives in two
//! steps, then typing, arrow keys, Enter and clicks move the suggestion list
//! through its states. A `Recorder` stands in for the page.

use ballotdb_rs::prelude::*;

fn show(session: &BallotSession<PlainText, Recorder>, event: &UiEvent, t: &Transition) {
    let state = match session.controller().state() {
        SuggestionState::Idle => "idle".to_string(),
        SuggestionState::Showing { items, selected } => {
            format!("showing {} item(s), selected {selected:?}", items.len())
        }
    };
    println!("{event:<40} -> {t:<30} [{state}]", event = format!("{event:?}"), t = format!("{t:?}"));
}

fn main() -> Result<()> {
    println!("=== ballotdb-rs Event Flow Example ===\n");

    let store = RecordStore::load()?;
    let mut session = BallotSession::new(SearchConfig::default(), PlainText, Recorder::default());

    // Ballots first is a load-order error; the session stays usable.
    if let Err(e) = session.install_ballots(store.ballots().to_vec()) {
        println!("✗ {e}");
    }
    session.install_lookup(store.lookup().to_vec())?;
    println!("stage after lookup: {:?}", session.stage());

    // Searching now renders the no-results state.
    println!("search before ballots: {} result(s)", session.search("Cook"));

    session.install_ballots(store.ballots().to_vec())?;
    println!("stage after ballots: {:?}\n", session.stage());

    let events = [
        UiEvent::Input("c".into()),
        UiEvent::Input("co".into()),
        UiEvent::Key(NavKey::Down),
        UiEvent::Key(NavKey::Down),
        UiEvent::Key(NavKey::Up),
        UiEvent::Key(NavKey::Up),
        UiEvent::Key(NavKey::Enter),
        UiEvent::Input("cook".into()),
        UiEvent::Click {
            inside_search_region: true,
        },
        UiEvent::Click {
            inside_search_region: false,
        },
        UiEvent::Input("suff".into()),
        UiEvent::SuggestionClick(0),
        UiEvent::Input("district 4".into()),
        UiEvent::Key(NavKey::Enter),
    ];

    for event in events {
        let t = session.handle(event.clone());
        show(&session, &event, &t);
        if let Transition::Commit(query) = &t {
            let titles: Vec<&str> = session
                .view()
                .last_results()
                .unwrap_or_default()
                .iter()
                .map(|c| c.title.as_str())
                .collect();
            println!("    search {query:?}: {titles:?}");
        }
    }

    let view = session.into_view();
    println!(
        "\n{} suggestion render(s), {} highlight(s), {} result render(s)",
        view.suggestion_renders.len(),
        view.highlights.len(),
        view.result_renders.len()
    );
    Ok(())
}
