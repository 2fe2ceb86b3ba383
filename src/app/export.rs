//! Export orchestration methods
//!
//! Only one export may be outstanding at a time, across all sessions.

use log::info;

use crate::logic::validation::ValidationError;
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Submit an export for the selected session
    pub fn submit_export(&mut self) -> Result<(), ValidationError> {
        let export = &mut self.model.export;

        if export.in_flight {
            return Err(ValidationError::ExportInFlight);
        }

        let Some(session_name) = export.selected_session().map(|s| s.name.clone()) else {
            let e = ValidationError::NoSessionSelected;
            export.validation = Some(e.to_string());
            self.notify_changed();
            return Err(e);
        };

        let hero_only = export.hero_only;
        info!("exporting '{}' (hero_only={})", session_name, hero_only);

        export.validation = None;
        export.outcome = None;
        export.in_flight = true;
        self.send(ApiRequest::ExportVideo {
            session_name,
            hero_only,
        });
        self.notify_changed();
        Ok(())
    }

    pub fn toggle_hero_only(&mut self) {
        self.model.export.hero_only = !self.model.export.hero_only;
        self.notify_changed();
    }
}
