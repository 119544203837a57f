// crates/ballot-core/src/controller.rs

//! # Suggestion Controller
//!
//! A two-state machine behind the search box:
//!
//! ```text
//!            input (>= 2 chars, hits)
//!   Idle  ───────────────────────────▶  Showing { items, selected }
//!    ▲                                     │  ▲
//!    │  Enter / outside click /            │  │ Down / Up / input with hits
//!    │  suggestion click / input w/o hits  │  │
//!    └─────────────────────────────────────┘──┘
//! ```
//!
//! The selection is an explicit `Option<usize>`; `None` means no row is
//! highlighted. Navigation never wraps, and `Up` cannot return to `None`.

use crate::config::SearchConfig;
use crate::suggest::SuggestionIndex;

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` name; other keys are ignored.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" => Some(NavKey::Down),
            "ArrowUp" => Some(NavKey::Up),
            "Enter" => Some(NavKey::Enter),
            _ => None,
        }
    }
}

/// Input events consumed by the controller, independent of any UI toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search box text changed; carries the full current text.
    Input(String),
    Key(NavKey),
    /// A click anywhere on the page.
    Click { inside_search_region: bool },
    /// A click on the suggestion row at this position.
    SuggestionClick(usize),
}

/// What the suggestion list currently looks like.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionState {
    #[default]
    Idle,
    Showing {
        items: Vec<String>,
        selected: Option<usize>,
    },
}

/// Outcome of an event, telling the caller what to redraw or run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// A fresh list is showing with nothing selected.
    Shown,
    /// The highlighted row moved to this index.
    Selected(usize),
    /// The list was removed without a search.
    Hidden,
    /// The list was removed and this query must be searched.
    Commit(String),
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionController {
    config: SearchConfig,
    state: SuggestionState,
    input: String,
}

impl SuggestionController {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            state: SuggestionState::Idle,
            input: String::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// Current text of the search box as last reported or committed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.state, SuggestionState::Showing { .. })
    }

    /// Items on display; empty while idle.
    pub fn items(&self) -> &[String] {
        match &self.state {
            SuggestionState::Showing { items, .. } => items,
            SuggestionState::Idle => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match &self.state {
            SuggestionState::Showing { selected, .. } => *selected,
            SuggestionState::Idle => None,
        }
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_index()
            .and_then(|i| self.items().get(i))
            .map(String::as_str)
    }

    /// Dispatches any [`UiEvent`].
    pub fn handle(&mut self, index: &SuggestionIndex, event: UiEvent) -> Transition {
        match event {
            UiEvent::Input(text) => self.on_input(index, &text),
            UiEvent::Key(key) => self.on_key(key),
            UiEvent::Click {
                inside_search_region,
            } => self.on_click(inside_search_region),
            UiEvent::SuggestionClick(i) => self.on_suggestion_click(i),
        }
    }

    /// Text changed. Short input leaves a shown list in place.
    pub fn on_input(&mut self, index: &SuggestionIndex, text: &str) -> Transition {
        self.input = text.to_owned();
        if !self.config.qualifies(text) {
            return Transition::Unchanged;
        }

        let items: Vec<String> = index
            .suggest(text, &self.config)
            .into_iter()
            .map(str::to_owned)
            .collect();

        if items.is_empty() {
            return self.hide();
        }
        self.state = SuggestionState::Showing {
            items,
            selected: None,
        };
        Transition::Shown
    }

    pub fn on_key(&mut self, key: NavKey) -> Transition {
        match key {
            NavKey::Down => self.move_down(),
            NavKey::Up => self.move_up(),
            NavKey::Enter => self.enter(),
        }
    }

    pub fn on_click(&mut self, inside_search_region: bool) -> Transition {
        if inside_search_region {
            Transition::Unchanged
        } else {
            self.hide()
        }
    }

    pub fn on_suggestion_click(&mut self, position: usize) -> Transition {
        match self.items().get(position).cloned() {
            Some(item) => self.commit(item),
            None => Transition::Unchanged,
        }
    }

    fn move_down(&mut self) -> Transition {
        let SuggestionState::Showing { items, selected } = &mut self.state else {
            return Transition::Unchanged;
        };
        let next = match *selected {
            None => 0,
            Some(i) if i + 1 < items.len() => i + 1,
            Some(_) => return Transition::Unchanged,
        };
        *selected = Some(next);
        Transition::Selected(next)
    }

    fn move_up(&mut self) -> Transition {
        let SuggestionState::Showing { selected, .. } = &mut self.state else {
            return Transition::Unchanged;
        };
        match *selected {
            Some(i) if i > 0 => {
                *selected = Some(i - 1);
                Transition::Selected(i - 1)
            }
            _ => Transition::Unchanged,
        }
    }

    fn enter(&mut self) -> Transition {
        match self.selected_item().map(str::to_owned) {
            Some(item) => self.commit(item),
            None => {
                let query = self.input.trim().to_owned();
                self.state = SuggestionState::Idle;
                Transition::Commit(query)
            }
        }
    }

    /// The committed item also becomes the search box text.
    fn commit(&mut self, item: String) -> Transition {
        self.input = item.clone();
        self.state = SuggestionState::Idle;
        Transition::Commit(item)
    }

    /// Removes the list without committing anything.
    pub fn dismiss(&mut self) -> Transition {
        self.hide()
    }

    fn hide(&mut self) -> Transition {
        match std::mem::take(&mut self.state) {
            SuggestionState::Idle => Transition::Unchanged,
            SuggestionState::Showing { .. } => Transition::Hidden,
        }
    }
}
