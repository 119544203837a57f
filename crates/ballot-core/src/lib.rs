// crates/ballot-core/src/lib.rs

//! # ballot-core
//!
//! Lookup engine for a ballot preview tool. Given a location query such as
//! `"Cook, Illinois (60629)"`, a bare zip code or a fragment of a county name,
//! it finds the matching ballot records and hands them to a renderer.
//!
//! The crate is organised leaves first:
//!
//! - [`model`]: [`LookupRow`], [`BallotRecord`] and the [`RecordStore`] owning them
//! - [`suggest`]: the deduplicated `"County, State (Zip)"` [`SuggestionIndex`]
//! - [`query`]: [`parse_query`] for the structured `"X, Y (Z)"` shape
//! - [`search`]: the two-phase [`search()`](search::search) match engine
//! - [`controller`]: the keyboard-driven [`SuggestionController`]
//! - [`render`]: the presentation seams ([`MarkdownRenderer`], [`SuggestionSink`], [`ResultSink`])
//! - [`session`]: [`BallotSession`], wiring everything to incoming [`UiEvent`]s
//!
//! ```rust
//! use ballot_core::prelude::*;
//!
//! let lookup = vec![LookupRow::new("Cook", "Illinois", "60629")];
//! let ballots = vec![BallotRecord::new("Cook", "Illinois", "60629", None, "# Ballot")];
//! let store = RecordStore::new(lookup, ballots);
//!
//! let hits = search(store.ballots(), "Cook, Illinois (60629)");
//! assert_eq!(hits.len(), 1);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod loader; // Physical layer: CSV / JSON / compiled store
pub mod model;
pub mod prelude;
pub mod query;
#[doc(hidden)]
pub mod raw; // Shared raw input rows used by the loaders
pub mod render;
pub mod search;
pub mod session;
pub mod suggest;
pub mod text;

// Re-exports
pub use crate::config::SearchConfig;
pub use crate::controller::{NavKey, SuggestionController, SuggestionState, Transition, UiEvent};
pub use crate::error::{BallotError, Result};
pub use crate::model::{BallotRecord, LookupRow, RecordStore, StoreStats};
pub use crate::query::{parse_query, ParsedQuery};
pub use crate::render::{
    MarkdownRenderer, ResultCard, ResultSink, SuggestionSink, EXAMPLE_QUERIES, NO_RESULTS_MESSAGE,
};
pub use crate::search::{search, search_with_phase, MatchPhase, SearchHits};
pub use crate::session::{BallotSession, LoadStage};
pub use crate::suggest::SuggestionIndex;
