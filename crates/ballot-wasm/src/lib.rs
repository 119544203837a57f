//! ballot-wasm: WebAssembly bindings for ballot-core
//!
//! Drives one search box from JavaScript. The page owns the DOM; this crate
//! owns the data, the suggestion list state and the search. Rendering goes
//! back to the page through callbacks.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { BallotApp, example_queries } from 'ballot-wasm';
//!
//! await init();
//! const app = new BallotApp(
//!   (items) => drawSuggestions(items),      // [] removes the list
//!   (cards) => drawResults(cards),          // [{ title, body_html }], [] = no results
//!   (index) => highlightRow(index),         // optional
//!   (markdown) => marked.parse(markdown),   // optional, plain text otherwise
//! );
//!
//! app.load_lookup('zip_lookup.csv', await (await fetch('zip_lookup.csv')).text());
//! app.load_ballots('data.csv', await (await fetch('data.csv')).text());
//!
//! input.oninput = () => app.on_input(input.value);
//! input.onkeydown = (e) => app.on_key(e.key);
//! document.onclick = (e) => app.on_click(searchBox.contains(e.target));
//! ```
//!
//! Notes
//! -----
//! - The lookup table must be loaded before the ballots.
//! - Table format follows the file name (`.csv` or `.json`).
//! - Event methods return the transition as `{ kind, index?, query? }`.
use ballot_core::loader::{ballots_from_reader, lookup_from_reader, SourceFormat};
use ballot_core::{
    BallotSession, MarkdownRenderer, NavKey, ResultCard, ResultSink, SearchConfig,
    SuggestionSink, Transition, UiEvent, EXAMPLE_QUERIES,
};
use js_sys::{Array, Function};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing ballot WASM module...".into());
}

fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

/* --------------------------------------------------------------------------
   Callbacks
-------------------------------------------------------------------------- */

/// Markdown through an optional JS function; plain text without one.
struct JsMarkdown(Option<Function>);

impl MarkdownRenderer for JsMarkdown {
    fn render_markdown(&self, text: &str) -> String {
        let Some(f) = &self.0 else {
            return text.to_owned();
        };
        match f.call1(&JsValue::NULL, &JsValue::from_str(text)) {
            Ok(v) => v.as_string().unwrap_or_else(|| {
                console_error("markdown callback did not return a string");
                text.to_owned()
            }),
            Err(e) => {
                web_sys::console::error_2(&"markdown callback failed:".into(), &e);
                text.to_owned()
            }
        }
    }
}

struct JsView {
    suggestions: Function,
    results: Function,
    highlight: Option<Function>,
}

fn report(result: Result<JsValue, JsValue>, what: &str) {
    if let Err(e) = result {
        web_sys::console::error_2(&format!("{what} callback failed:").into(), &e);
    }
}

impl SuggestionSink for JsView {
    fn render_suggestions(&mut self, items: &[String]) {
        let array: Array = items.iter().map(|s| JsValue::from_str(s)).collect();
        report(self.suggestions.call1(&JsValue::NULL, &array), "suggestion");
    }

    fn highlight_suggestion(&mut self, index: usize) {
        if let Some(f) = &self.highlight {
            report(f.call1(&JsValue::NULL, &JsValue::from(index as u32)), "highlight");
        }
    }
}

impl ResultSink for JsView {
    fn render_results(&mut self, cards: &[ResultCard]) {
        match to_value(cards) {
            Ok(v) => report(self.results.call1(&JsValue::NULL, &v), "result"),
            Err(e) => console_error(&format!("could not convert results: {e}")),
        }
    }
}

/* --------------------------------------------------------------------------
   Transitions
-------------------------------------------------------------------------- */

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TransitionView {
    Unchanged,
    Shown,
    Selected { index: usize },
    Hidden,
    Commit { query: String },
}

impl From<Transition> for TransitionView {
    fn from(t: Transition) -> Self {
        match t {
            Transition::Unchanged => TransitionView::Unchanged,
            Transition::Shown => TransitionView::Shown,
            Transition::Selected(index) => TransitionView::Selected { index },
            Transition::Hidden => TransitionView::Hidden,
            Transition::Commit(query) => TransitionView::Commit { query },
        }
    }
}

#[derive(Serialize)]
struct StatsView {
    lookup_rows: usize,
    suggestions: usize,
    ballots: usize,
    ready: bool,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/* --------------------------------------------------------------------------
   App
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct BallotApp {
    session: BallotSession<JsMarkdown, JsView>,
}

#[wasm_bindgen]
impl BallotApp {
    #[wasm_bindgen(constructor)]
    pub fn new(
        render_suggestions: Function,
        render_results: Function,
        highlight: Option<Function>,
        markdown: Option<Function>,
    ) -> BallotApp {
        let view = JsView {
            suggestions: render_suggestions,
            results: render_results,
            highlight,
        };
        BallotApp {
            session: BallotSession::new(SearchConfig::default(), JsMarkdown(markdown), view),
        }
    }

    /// Parses and installs the zip lookup table. Returns the row count.
    pub fn load_lookup(&mut self, file_name: &str, text: &str) -> Result<usize, JsValue> {
        let format = SourceFormat::from_path(file_name).map_err(js_err)?;
        let rows = lookup_from_reader(text.as_bytes(), format).map_err(js_err)?;
        let n = rows.len();
        self.session.install_lookup(rows).map_err(js_err)?;
        Ok(n)
    }

    /// Parses and installs the ballot table. Returns the record count.
    pub fn load_ballots(&mut self, file_name: &str, text: &str) -> Result<usize, JsValue> {
        let format = SourceFormat::from_path(file_name).map_err(js_err)?;
        let records = ballots_from_reader(text.as_bytes(), format).map_err(js_err)?;
        let n = records.len();
        self.session.install_ballots(records).map_err(js_err)?;
        Ok(n)
    }

    pub fn on_input(&mut self, text: &str) -> JsValue {
        self.dispatch(UiEvent::Input(text.to_owned()))
    }

    /// Takes a `KeyboardEvent.key`; keys other than the arrows and Enter are ignored.
    pub fn on_key(&mut self, key: &str) -> JsValue {
        match NavKey::from_key_name(key) {
            Some(key) => self.dispatch(UiEvent::Key(key)),
            None => transition_value(Transition::Unchanged),
        }
    }

    pub fn on_click(&mut self, inside_search_region: bool) -> JsValue {
        self.dispatch(UiEvent::Click {
            inside_search_region,
        })
    }

    pub fn on_suggestion_click(&mut self, index: usize) -> JsValue {
        self.dispatch(UiEvent::SuggestionClick(index))
    }

    /// Searches directly and renders the results. Returns the result count.
    pub fn search(&mut self, query: &str) -> usize {
        self.session.search(query)
    }

    pub fn input(&self) -> String {
        self.session.controller().input().to_owned()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.session.controller().selected_index()
    }

    pub fn stats(&self) -> JsValue {
        let stats = self.session.store().stats();
        let view = StatsView {
            lookup_rows: stats.lookup_rows,
            suggestions: self.session.index().len(),
            ballots: stats.ballots,
            ready: self.session.stage() == ballot_core::LoadStage::Complete,
        };
        to_value(&view).unwrap_or(JsValue::NULL)
    }
}

impl BallotApp {
    fn dispatch(&mut self, event: UiEvent) -> JsValue {
        transition_value(self.session.handle(event))
    }
}

fn transition_value(t: Transition) -> JsValue {
    to_value(&TransitionView::from(t)).unwrap_or(JsValue::NULL)
}

/// Queries shown on the empty page.
#[wasm_bindgen]
pub fn example_queries() -> Array {
    EXAMPLE_QUERIES.iter().map(|q| JsValue::from_str(q)).collect()
}
