//! Export Model
//!
//! Export selector and the single global in-flight flag.

use crate::api::Session;

use super::types::LoadState;

/// Terminal result of an export request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Backend output, shown verbatim
    Success(String),
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct ExportModel {
    /// Sessions with at least one analyzed screenshot
    pub choices: Vec<Session>,

    pub state: LoadState,

    pub selected: Option<usize>,

    pub hero_only: bool,

    /// One export at a time, across all sessions
    pub in_flight: bool,

    pub outcome: Option<ExportOutcome>,

    /// Local validation message (no request issued)
    pub validation: Option<String>,
}

impl ExportModel {
    pub fn new() -> Self {
        Self {
            choices: Vec::new(),
            state: LoadState::Idle,
            selected: None,
            hero_only: false,
            in_flight: false,
            outcome: None,
            validation: None,
        }
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.selected.and_then(|idx| self.choices.get(idx))
    }
}

impl Default for ExportModel {
    fn default() -> Self {
        Self::new()
    }
}
