// crates/ballot-core/src/session.rs

//! # Session
//!
//! Glues the pieces together for one search box: the dataset, the suggestion
//! index, the controller and the presentation seams.
//!
//! Data arrives in two steps. The lookup table comes first and enables
//! suggestions; ballot records follow and enable results. Until the ballots
//! are installed a search runs over an empty record set and renders the
//! no-results state.

use crate::config::SearchConfig;
use crate::controller::{SuggestionController, Transition, UiEvent};
use crate::error::{BallotError, Result};
use crate::model::{BallotRecord, LookupRow, RecordStore};
use crate::render::{MarkdownRenderer, ResultCard, ResultSink, SuggestionSink};
use crate::search::search_with_phase;
use crate::suggest::SuggestionIndex;

/// How much of the dataset has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Pending,
    LookupLoaded,
    Complete,
}

pub struct BallotSession<M, V> {
    store: RecordStore,
    index: SuggestionIndex,
    stage: LoadStage,
    controller: SuggestionController,
    markdown: M,
    view: V,
}

impl<M, V> BallotSession<M, V>
where
    M: MarkdownRenderer,
    V: SuggestionSink + ResultSink,
{
    /// A session waiting for its data.
    pub fn new(config: SearchConfig, markdown: M, view: V) -> Self {
        Self {
            store: RecordStore::default(),
            index: SuggestionIndex::default(),
            stage: LoadStage::Pending,
            controller: SuggestionController::new(config),
            markdown,
            view,
        }
    }

    /// A session over an already complete store.
    pub fn from_store(store: RecordStore, config: SearchConfig, markdown: M, view: V) -> Self {
        let index = SuggestionIndex::build(store.lookup());
        Self {
            store,
            index,
            stage: LoadStage::Complete,
            controller: SuggestionController::new(config),
            markdown,
            view,
        }
    }

    /// Installs the lookup table and builds the suggestion index.
    pub fn install_lookup(&mut self, rows: Vec<LookupRow>) -> Result<()> {
        if self.stage != LoadStage::Pending {
            return Err(BallotError::InvalidData(
                "zip lookup table is already loaded".into(),
            ));
        }
        log::info!("zip lookup loaded: {} rows", rows.len());
        self.index = SuggestionIndex::build(&rows);
        self.store.lookup = rows;
        self.stage = LoadStage::LookupLoaded;
        Ok(())
    }

    /// Installs the ballot records. The lookup table must already be in place.
    pub fn install_ballots(&mut self, records: Vec<BallotRecord>) -> Result<()> {
        match self.stage {
            LoadStage::Pending => {
                log::warn!("ballot data offered before the zip lookup table; rejected");
                Err(BallotError::LoadOrder)
            }
            LoadStage::Complete => Err(BallotError::InvalidData(
                "ballot data is already loaded".into(),
            )),
            LoadStage::LookupLoaded => {
                log::info!("ballot data loaded: {} records", records.len());
                self.store.ballots = records;
                self.stage = LoadStage::Complete;
                Ok(())
            }
        }
    }

    /// Feeds one UI event through the controller and renders the outcome.
    pub fn handle(&mut self, event: UiEvent) -> Transition {
        let transition = self.controller.handle(&self.index, event);
        match &transition {
            Transition::Unchanged => {}
            Transition::Shown => self.view.render_suggestions(self.controller.items()),
            Transition::Selected(i) => self.view.highlight_suggestion(*i),
            Transition::Hidden => self.view.render_suggestions(&[]),
            Transition::Commit(query) => {
                self.view.render_suggestions(&[]);
                self.render_search(query);
            }
        }
        transition
    }

    /// Runs a search directly (search button, deep link) and renders it.
    ///
    /// Any shown suggestion list is removed first. Returns the number of
    /// results rendered.
    pub fn search(&mut self, query: &str) -> usize {
        if self.controller.dismiss() == Transition::Hidden {
            self.view.render_suggestions(&[]);
        }
        self.render_search(query)
    }

    /// Result cards for `query` without rendering them.
    pub fn cards(&self, query: &str) -> Vec<ResultCard> {
        search_with_phase(self.store.ballots(), query)
            .records
            .into_iter()
            .map(|r| ResultCard::from_record(r, &self.markdown))
            .collect()
    }

    fn render_search(&mut self, query: &str) -> usize {
        if self.stage != LoadStage::Complete {
            log::info!("search for {:?} before ballot data finished loading", query);
        }
        let cards = self.cards(query);
        self.view.render_results(&cards);
        cards.len()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn index(&self) -> &SuggestionIndex {
        &self.index
    }

    pub fn stage(&self) -> LoadStage {
        self.stage
    }

    pub fn controller(&self) -> &SuggestionController {
        &self.controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::NavKey;
    use crate::render::{PlainText, Recorder};

    fn lookup() -> Vec<LookupRow> {
        vec![
            LookupRow::new("Cook", "Illinois", "60629"),
            LookupRow::new("Kings", "New York", "11226"),
        ]
    }

    fn ballots() -> Vec<BallotRecord> {
        vec![
            BallotRecord::new("Cook", "Illinois", "60629", Some("District 3"), "# Cook"),
            BallotRecord::new("Kings", "New York", "11226", None, "# Kings"),
        ]
    }

    fn session() -> BallotSession<PlainText, Recorder> {
        BallotSession::new(SearchConfig::default(), PlainText, Recorder::default())
    }

    #[test]
    fn ballots_before_lookup_are_rejected() {
        let mut s = session();
        assert!(matches!(
            s.install_ballots(ballots()),
            Err(BallotError::LoadOrder)
        ));
        assert_eq!(s.stage(), LoadStage::Pending);
    }

    #[test]
    fn staged_loading_reaches_complete() {
        let mut s = session();
        s.install_lookup(lookup()).unwrap();
        assert_eq!(s.stage(), LoadStage::LookupLoaded);
        assert_eq!(s.index().len(), 2);
        s.install_ballots(ballots()).unwrap();
        assert_eq!(s.stage(), LoadStage::Complete);
        assert!(s.install_ballots(ballots()).is_err());
        assert!(s.install_lookup(lookup()).is_err());
    }

    #[test]
    fn search_before_ballots_renders_no_results() {
        let mut s = session();
        s.install_lookup(lookup()).unwrap();
        assert_eq!(s.search("Cook"), 0);
        assert_eq!(s.view().last_results(), Some(&[][..]));
    }

    #[test]
    fn typing_then_enter_renders_cards() {
        let mut s = session();
        s.install_lookup(lookup()).unwrap();
        s.install_ballots(ballots()).unwrap();

        assert_eq!(s.handle(UiEvent::Input("coo".into())), Transition::Shown);
        assert_eq!(
            s.view().last_suggestions().unwrap(),
            ["Cook, Illinois (60629)".to_string()]
        );

        s.handle(UiEvent::Key(NavKey::Down));
        assert_eq!(s.view().highlights, vec![0]);

        let t = s.handle(UiEvent::Key(NavKey::Enter));
        assert_eq!(t, Transition::Commit("Cook, Illinois (60629)".into()));
        assert_eq!(s.view().last_suggestions(), Some(&[][..]));

        let cards = s.view().last_results().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Cook, Illinois － District 3");
        assert_eq!(cards[0].body_html, "# Cook");
    }

    #[test]
    fn markdown_renderer_runs_once_per_card() {
        use std::cell::Cell;
        let calls = Cell::new(0);
        let md = |text: &str| {
            calls.set(calls.get() + 1);
            format!("<p>{text}</p>")
        };
        let mut s = BallotSession::from_store(
            RecordStore::new(lookup(), ballots()),
            SearchConfig::default(),
            md,
            Recorder::default(),
        );
        assert_eq!(s.search(""), 2);
        assert_eq!(calls.get(), 2);
        assert_eq!(s.view().last_results().unwrap()[1].body_html, "<p># Kings</p>");
    }

    #[test]
    fn direct_search_hides_open_list() {
        let mut s = BallotSession::from_store(
            RecordStore::new(lookup(), ballots()),
            SearchConfig::default(),
            PlainText,
            Recorder::default(),
        );
        s.handle(UiEvent::Input("kings".into()));
        assert!(s.controller().is_showing());
        assert_eq!(s.search("kings"), 1);
        assert!(!s.controller().is_showing());
        assert_eq!(s.view().last_suggestions(), Some(&[][..]));
    }

    #[test]
    fn outside_click_clears_suggestions() {
        let mut s = BallotSession::from_store(
            RecordStore::new(lookup(), ballots()),
            SearchConfig::default(),
            PlainText,
            Recorder::default(),
        );
        s.handle(UiEvent::Input("kings".into()));
        assert_eq!(
            s.handle(UiEvent::Click {
                inside_search_region: false
            }),
            Transition::Hidden
        );
        assert_eq!(s.view().suggestion_renders.len(), 2);
        assert!(s.view().result_renders.is_empty());
    }
}
