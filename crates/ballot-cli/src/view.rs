//! Terminal implementations of the ballot-core presentation seams.

use ballot_core::{MarkdownRenderer, ResultCard, ResultSink, SuggestionSink, NO_RESULTS_MESSAGE};
use pulldown_cmark::{html, Options, Parser};
use std::io::Write;

/// How ballot markdown is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkdownMode {
    /// Print the markdown source as-is.
    #[default]
    Plain,
    /// Convert to HTML (tables enabled).
    Html,
}

impl MarkdownRenderer for MarkdownMode {
    fn render_markdown(&self, text: &str) -> String {
        match self {
            MarkdownMode::Plain => text.to_owned(),
            MarkdownMode::Html => markdown_to_html(text),
        }
    }
}

pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Prints suggestion lists and result cards to a writer.
pub struct TerminalView<W: Write> {
    out: W,
    shown: Vec<String>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_list(&mut self, highlight: Option<usize>) -> std::io::Result<()> {
        if self.shown.is_empty() {
            return writeln!(self.out, "(no suggestions)");
        }
        writeln!(self.out, "Suggestions:")?;
        for (i, item) in self.shown.iter().enumerate() {
            let marker = if Some(i) == highlight { '>' } else { ' ' };
            writeln!(self.out, "{marker} {}. {item}", i + 1)?;
        }
        Ok(())
    }

    fn print_cards(&mut self, cards: &[ResultCard]) -> std::io::Result<()> {
        if cards.is_empty() {
            return writeln!(self.out, "{NO_RESULTS_MESSAGE}");
        }
        for card in cards {
            writeln!(self.out, "== {} ==", card.title)?;
            writeln!(self.out, "{}", card.body_html.trim_end())?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> SuggestionSink for TerminalView<W> {
    fn render_suggestions(&mut self, items: &[String]) {
        self.shown = items.to_vec();
        if let Err(e) = self.print_list(None) {
            log::error!("failed to print suggestions: {e}");
        }
    }

    fn highlight_suggestion(&mut self, index: usize) {
        if let Err(e) = self.print_list(Some(index)) {
            log::error!("failed to print suggestions: {e}");
        }
    }
}

impl<W: Write> ResultSink for TerminalView<W> {
    fn render_results(&mut self, cards: &[ResultCard]) {
        if let Err(e) = self.print_cards(cards) {
            log::error!("failed to print results: {e}");
        }
    }
}
