//! Capture orchestration methods
//!
//! The toggle never trusts the last known status: it asks the backend first
//! (through the request service, so the UI keeps running) and only then opens
//! the stop confirmation or the start form. Every start or stop is followed
//! by a fresh reconciliation whatever the outcome.

use log::info;

use crate::api::CaptureStatus;
use crate::logic::validation::{normalize_description, validate_session_name, ValidationError};
use crate::model::capture::StartForm;
use crate::services::api::{ApiRequest, CatalogTarget, StatusOrigin};
use crate::App;

impl App {
    /// User activated the capture toggle
    ///
    /// The decision is made in `apply_toggle` once the status arrives.
    pub fn toggle_capture(&mut self) {
        if self.model.capture.busy() {
            self.model
                .show_toast("A capture request is already in progress".to_string());
            self.notify_changed();
            return;
        }

        self.model.capture.toggle_pending = true;
        self.send(ApiRequest::GetCaptureStatus {
            origin: StatusOrigin::Toggle,
        });
        self.notify_changed();
    }

    /// Decide the toggle action from a freshly fetched status
    pub fn apply_toggle(&mut self, status: CaptureStatus) {
        if self.model.capture.mutation_pending {
            self.model
                .show_toast("A capture request is already in progress".to_string());
            self.notify_changed();
            return;
        }

        let running = status.running;
        let session = status.session.clone();
        self.model.capture.apply_status(status);

        if running {
            self.model.capture.start_form = None;
            self.model.capture.confirm_stop = Some(session.unwrap_or_default());
        } else {
            self.model.capture.confirm_stop = None;
            self.model.capture.start_form = Some(StartForm::new());
        }
        self.notify_changed();
    }

    /// Validate the start form and request a new capture
    pub fn submit_start_form(&mut self) -> Result<(), ValidationError> {
        let Some(form) = self.model.capture.start_form.as_mut() else {
            return Ok(());
        };

        let session_name = match validate_session_name(&form.name) {
            Ok(name) => name,
            Err(e) => {
                form.error = Some(e.to_string());
                self.notify_changed();
                return Err(e);
            }
        };
        let description = normalize_description(&form.description);

        info!("starting capture '{}'", session_name);
        self.model.capture.start_form = None;
        self.model.capture.mutation_pending = true;
        self.send(ApiRequest::StartCapture {
            session_name,
            description,
        });
        self.notify_changed();
        Ok(())
    }

    pub fn cancel_start_form(&mut self) {
        self.model.capture.start_form = None;
        self.notify_changed();
    }

    /// User confirmed stopping the active capture
    pub fn confirm_stop(&mut self) {
        if self.model.capture.confirm_stop.take().is_none() {
            return;
        }
        info!("stopping capture");
        self.model.capture.mutation_pending = true;
        self.send(ApiRequest::StopCapture);
        self.notify_changed();
    }

    pub fn cancel_stop(&mut self) {
        self.model.capture.confirm_stop = None;
        self.notify_changed();
    }

    /// Re-ask the backend after a start/stop instead of assuming the result
    pub fn refresh_after_capture_change(&mut self) {
        self.send(ApiRequest::GetCaptureStatus {
            origin: StatusOrigin::Reconcile,
        });
        self.send(ApiRequest::GetStats);
        self.send(ApiRequest::ListSessions {
            target: CatalogTarget::Catalog,
        });
    }
}
