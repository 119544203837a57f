// crates/ballot-core/src/render.rs

//! Presentation seams. The core decides *what* to show; implementations of
//! these traits decide *how* (DOM, terminal, test recorder).

use crate::model::BallotRecord;
use serde::{Deserialize, Serialize};

/// Shown in place of result cards when a search finds nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Sample queries offered before the first search.
pub const EXAMPLE_QUERIES: [&str; 3] = [
    "Los Angeles, California (90011)",
    "Cook, Illinois (60629)",
    "Kings, New York (11226)",
];

/// Turns ballot markdown into display markup. Output is trusted as-is.
pub trait MarkdownRenderer {
    fn render_markdown(&self, text: &str) -> String;
}

/// Receives the suggestion list. An empty slice removes the list.
pub trait SuggestionSink {
    fn render_suggestions(&mut self, items: &[String]);

    /// Moves the highlight to `index` within the list last rendered.
    fn highlight_suggestion(&mut self, _index: usize) {}
}

/// Receives search results. An empty slice is the no-results state.
pub trait ResultSink {
    fn render_results(&mut self, cards: &[ResultCard]);
}

/// One rendered search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCard {
    pub title: String,
    pub body_html: String,
}

impl ResultCard {
    /// Builds a card, calling the markdown renderer exactly once.
    pub fn from_record<M: MarkdownRenderer + ?Sized>(record: &BallotRecord, markdown: &M) -> Self {
        Self {
            title: record.title(),
            body_html: markdown.render_markdown(record.ballot_markdown()),
        }
    }
}

/// Passes markdown through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl MarkdownRenderer for PlainText {
    fn render_markdown(&self, text: &str) -> String {
        text.to_owned()
    }
}

impl<F> MarkdownRenderer for F
where
    F: Fn(&str) -> String,
{
    fn render_markdown(&self, text: &str) -> String {
        self(text)
    }
}

/// Records every render call; handy for tests and headless drivers.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub suggestion_renders: Vec<Vec<String>>,
    pub highlights: Vec<usize>,
    pub result_renders: Vec<Vec<ResultCard>>,
}

impl Recorder {
    pub fn last_suggestions(&self) -> Option<&[String]> {
        self.suggestion_renders.last().map(Vec::as_slice)
    }

    pub fn last_results(&self) -> Option<&[ResultCard]> {
        self.result_renders.last().map(Vec::as_slice)
    }
}

impl SuggestionSink for Recorder {
    fn render_suggestions(&mut self, items: &[String]) {
        self.suggestion_renders.push(items.to_vec());
    }

    fn highlight_suggestion(&mut self, index: usize) {
        self.highlights.push(index);
    }
}

impl ResultSink for Recorder {
    fn render_results(&mut self, cards: &[ResultCard]) {
        self.result_renders.push(cards.to_vec());
    }
}
