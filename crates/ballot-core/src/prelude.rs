//! ballot-core prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::config::SearchConfig;
pub use crate::controller::{NavKey, SuggestionController, SuggestionState, Transition, UiEvent};
pub use crate::error::{BallotError, Result};
pub use crate::loader::{load_dataset, SourceFormat};
pub use crate::model::{BallotRecord, LookupRow, RecordStore, StoreStats};
pub use crate::query::{parse_query, ParsedQuery};
pub use crate::render::{
    MarkdownRenderer, PlainText, Recorder, ResultCard, ResultSink, SuggestionSink,
    EXAMPLE_QUERIES, NO_RESULTS_MESSAGE,
};
pub use crate::search::{search, search_with_phase, BallotSearch, MatchPhase, SearchHits};
pub use crate::session::{BallotSession, LoadStage};
pub use crate::suggest::SuggestionIndex;
