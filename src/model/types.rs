//! Shared types for the Model
//!
//! Load states are shared by every component that fetches from the backend,
//! so empty-but-successful and failed loads are always distinct.

/// Progress of a backend load for one slice of state
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Never requested
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Transport failure with the error detail
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
