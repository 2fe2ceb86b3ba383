//! Search Model
//!
//! Query input and the outcome of the latest submitted query. Search has no
//! relationship to the catalog or the open session.

use crate::api::SearchResult;

/// Outcome of the latest search
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Results(Vec<SearchResult>),
    /// Successful search with zero hits
    NoResults,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct SearchModel {
    /// Text being typed
    pub input: String,

    /// Whether the input is receiving keystrokes
    pub editing: bool,

    /// Latest query sent to the backend; older responses are stale
    pub submitted: Option<String>,

    pub state: SearchState,

    /// Local validation message (no request issued)
    pub validation: Option<String>,

    pub selected: Option<usize>,
}

impl SearchModel {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            editing: true,
            submitted: None,
            state: SearchState::Idle,
            validation: None,
            selected: None,
        }
    }

    pub fn results(&self) -> &[SearchResult] {
        match &self.state {
            SearchState::Results(results) => results,
            _ => &[],
        }
    }
}

impl Default for SearchModel {
    fn default() -> Self {
        Self::new()
    }
}
