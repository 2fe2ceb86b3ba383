//! Capture Model
//!
//! The backend owns the capture status; this slice only remembers the most
//! recent answer and what the UI derived from it.

use std::time::Instant;

use crate::api::CaptureStatus;
use crate::logic::capture::{reconcile, CaptureIndicator};

/// Which start-form field receives keystrokes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

/// Start-capture form contents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartForm {
    pub name: String,
    pub description: String,
    pub field: FormField,
    /// Validation message from the last submit attempt
    pub error: Option<String>,
}

impl StartForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            field: FormField::Name,
            error: None,
        }
    }

    /// Text of the focused field
    pub fn active_text_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Name,
        };
    }
}

impl Default for StartForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct CaptureModel {
    /// Last status received from the backend (idle until the first answer)
    pub status: CaptureStatus,

    /// Reconciled indicator, label and toggle action
    pub indicator: CaptureIndicator,

    /// When the last status arrived
    pub last_checked: Option<Instant>,

    /// Start form, open while the user fills it in
    pub start_form: Option<StartForm>,

    /// Stop confirmation for the named session
    pub confirm_stop: Option<String>,

    /// A start or stop request is in flight
    pub mutation_pending: bool,

    /// The toggle is waiting for a fresh status
    pub toggle_pending: bool,
}

impl CaptureModel {
    pub fn new() -> Self {
        Self {
            status: CaptureStatus::idle(),
            indicator: CaptureIndicator::default(),
            last_checked: None,
            start_form: None,
            confirm_stop: None,
            mutation_pending: false,
            toggle_pending: false,
        }
    }

    /// Start/stop or a toggle check is outstanding
    pub fn busy(&self) -> bool {
        self.mutation_pending || self.toggle_pending
    }

    /// Replace the status and re-derive the indicator
    pub fn apply_status(&mut self, status: CaptureStatus) {
        self.indicator = reconcile(&status);
        self.status = status;
        self.last_checked = Some(Instant::now());
    }
}

impl Default for CaptureModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::capture::ToggleAction;

    #[test]
    fn test_apply_status_reconciles() {
        let mut model = CaptureModel::new();
        model.apply_status(CaptureStatus {
            running: true,
            session: Some("demo".to_string()),
        });
        assert!(model.indicator.recording);
        assert_eq!(model.indicator.action, ToggleAction::Stop);
        assert!(model.last_checked.is_some());

        model.apply_status(CaptureStatus::idle());
        assert!(!model.indicator.recording);
        assert_eq!(model.indicator.action, ToggleAction::Start);
    }

    #[test]
    fn test_form_field_toggle() {
        let mut form = StartForm::new();
        form.active_text_mut().push_str("name");
        form.toggle_field();
        form.active_text_mut().push_str("desc");
        assert_eq!(form.name, "name");
        assert_eq!(form.description, "desc");
    }
}
