//! Catalog Model
//!
//! Session list as last loaded from the backend. Loads replace it wholesale.

use crate::api::Session;
use crate::logic::catalog::filter_sessions;

use super::types::LoadState;

#[derive(Clone, Debug)]
pub struct CatalogModel {
    /// Sessions in backend order
    pub sessions: Vec<Session>,

    pub state: LoadState,

    /// Filter text applied on every keystroke
    pub filter_query: String,

    /// Whether the filter input is receiving keystrokes
    pub filter_editing: bool,

    /// Selection index into the filtered list
    pub selected: Option<usize>,
}

impl CatalogModel {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            state: LoadState::Idle,
            filter_query: String::new(),
            filter_editing: false,
            selected: None,
        }
    }

    /// Sessions matching the current filter
    pub fn visible(&self) -> Vec<&Session> {
        filter_sessions(&self.sessions, &self.filter_query)
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.selected.and_then(|idx| self.visible().get(idx).copied())
    }
}

impl Default for CatalogModel {
    fn default() -> Self {
        Self::new()
    }
}
