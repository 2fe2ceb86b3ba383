//! Detail Model
//!
//! The open session and its screenshots. Screenshots are cached only while
//! their session is open.

use crate::api::{Screenshot, SessionDetail};
use crate::logic::detail::DetailStats;

use super::types::LoadState;

#[derive(Clone, Debug)]
pub struct DetailModel {
    /// Session id most recently requested; responses for other ids are stale
    pub requested_id: Option<i64>,

    pub state: LoadState,

    pub detail: Option<SessionDetail>,

    /// Aggregates derived when the detail arrived
    pub stats: DetailStats,

    pub selected_screenshot: Option<usize>,

    /// Analysis was triggered for the open session
    pub analysis_requested: bool,
}

impl DetailModel {
    pub fn new() -> Self {
        Self {
            requested_id: None,
            state: LoadState::Idle,
            detail: None,
            stats: DetailStats::default(),
            selected_screenshot: None,
            analysis_requested: false,
        }
    }

    /// Analyze is offered only when a session is loaded with nothing analyzed
    pub fn can_analyze(&self) -> bool {
        self.detail.is_some() && self.stats.can_analyze() && !self.analysis_requested
    }

    pub fn selected(&self) -> Option<&Screenshot> {
        let detail = self.detail.as_ref()?;
        self.selected_screenshot
            .and_then(|idx| detail.screenshots.get(idx))
    }
}

impl Default for DetailModel {
    fn default() -> Self {
        Self::new()
    }
}
