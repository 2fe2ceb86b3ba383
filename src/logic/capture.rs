//! Capture status reconciliation
//!
//! Maps the backend's capture status onto what the UI shows: the recording
//! indicator, the status label and the action the capture toggle performs.

use crate::api::CaptureStatus;

/// Label shown when nothing is recording
pub const IDLE_LABEL: &str = "Idle";

/// What activating the capture toggle will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Start,
    Stop,
}

impl ToggleAction {
    pub fn as_str(&self) -> &str {
        match self {
            ToggleAction::Start => "Start capture",
            ToggleAction::Stop => "Stop capture",
        }
    }
}

/// Observable output of a reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureIndicator {
    pub recording: bool,
    pub label: String,
    pub action: ToggleAction,
}

impl Default for CaptureIndicator {
    fn default() -> Self {
        reconcile(&CaptureStatus::idle())
    }
}

/// Derive the indicator from the latest fetched status
///
/// Depends only on `status`, so repeated or overlapping calls converge on
/// the same output.
///
/// # Examples
/// ```
/// use shotdeck::api::CaptureStatus;
/// use shotdeck::logic::capture::{reconcile, ToggleAction, IDLE_LABEL};
///
/// let idle = reconcile(&CaptureStatus::idle());
/// assert!(!idle.recording);
/// assert_eq!(idle.label, IDLE_LABEL);
/// assert_eq!(idle.action, ToggleAction::Start);
/// ```
pub fn reconcile(status: &CaptureStatus) -> CaptureIndicator {
    match (status.running, status.session.as_deref()) {
        (true, session) => CaptureIndicator {
            recording: true,
            // Running without a name is still running; show a generic label
            label: session.unwrap_or("Recording").to_string(),
            action: ToggleAction::Stop,
        },
        (false, _) => CaptureIndicator {
            recording: false,
            label: IDLE_LABEL.to_string(),
            action: ToggleAction::Start,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(name: &str) -> CaptureStatus {
        CaptureStatus {
            running: true,
            session: Some(name.to_string()),
        }
    }

    #[test]
    fn test_reconcile_running() {
        let indicator = reconcile(&running("demo"));
        assert!(indicator.recording);
        assert_eq!(indicator.label, "demo");
        assert_eq!(indicator.action, ToggleAction::Stop);
    }

    #[test]
    fn test_reconcile_idle() {
        let indicator = reconcile(&CaptureStatus::idle());
        assert!(!indicator.recording);
        assert_eq!(indicator.label, IDLE_LABEL);
        assert_eq!(indicator.action, ToggleAction::Start);
    }

    #[test]
    fn test_reconcile_idle_ignores_stray_session() {
        let status = CaptureStatus {
            running: false,
            session: Some("stale".to_string()),
        };
        assert_eq!(reconcile(&status).label, IDLE_LABEL);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let status = running("demo");
        let first = reconcile(&status);
        let second = reconcile(&status);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_indicator_is_idle() {
        assert_eq!(CaptureIndicator::default(), reconcile(&CaptureStatus::idle()));
    }
}
