//! Basic usage example for ballotdb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled lookup and ballot tables
//! - Parse a "County, State (Zip)" query
//! - Search with both match phases
//! - Build and filter the suggestion index

use ballotdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ballotdb-rs Basic Usage Example ===\n");

    println!("Loading bundled dataset...");
    let store = RecordStore::load()?;
    let stats = store.stats();
    println!(
        "✓ {} lookup rows, {} ballots\n",
        stats.lookup_rows, stats.ballots
    );

    // Example 1: query parsing
    println!("--- Example 1: Parse a committed suggestion ---");
    for text in ["Cook, Illinois (60629)", "Cook Illinois", "a, b, c (1)"] {
        match parse_query(text) {
            Some(q) => println!("{text:?} -> county={:?} state={:?} zip={:?}", q.county, q.state, q.zip),
            None => println!("{text:?} -> free text"),
        }
    }
    println!();

    // Example 2: structured match
    println!("--- Example 2: Structured search ---");
    let hits = search_with_phase(store.ballots(), "Cook, Illinois (60629)");
    println!("phase: {:?}, {} hit(s)", hits.phase, hits.len());
    for record in &hits.records {
        println!("  {}", record.title());
    }
    println!();

    // Example 3: fallback substring match over county, state, zip and district
    println!("--- Example 3: Fallback search ---");
    for q in ["texas", "606", "ward"] {
        let hits = search_with_phase(store.ballots(), q);
        println!("{q:?}: phase {:?}, {} hit(s)", hits.phase, hits.len());
    }
    println!();

    // Example 4: suggestions
    println!("--- Example 4: Suggestions ---");
    let index = SuggestionIndex::build(store.lookup());
    println!("{} distinct suggestions", index.len());
    for q in ["c", "co", "ill"] {
        println!("{q:?}: {:?}", index.suggest(q, &SearchConfig::default()));
    }
    println!();

    // Example 5: result cards
    println!("--- Example 5: Result cards ---");
    for q in EXAMPLE_QUERIES {
        let cards: Vec<ResultCard> = search(store.ballots(), q)
            .into_iter()
            .map(|r| ResultCard::from_record(r, &PlainText))
            .collect();
        if cards.is_empty() {
            println!("{q}: {NO_RESULTS_MESSAGE}");
        }
        for card in cards {
            let first_line = card.body_html.lines().next().unwrap_or_default();
            println!("{}: {first_line}", card.title);
        }
    }

    Ok(())
}
