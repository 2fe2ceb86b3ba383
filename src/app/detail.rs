//! Detail orchestration methods

use log::info;

use crate::logic::validation::ValidationError;
use crate::model::LoadState;
use crate::services::api::ApiRequest;
use crate::{App, View};

impl App {
    /// Show one session and load it with its screenshots
    pub fn open_session(&mut self, id: i64) {
        let detail = &mut self.model.detail;
        if detail.requested_id != Some(id) {
            detail.detail = None;
            detail.stats = Default::default();
            detail.selected_screenshot = None;
        }
        detail.requested_id = Some(id);
        detail.state = LoadState::Loading;
        detail.analysis_requested = false;

        self.model.view = View::SessionDetail;
        self.send(ApiRequest::GetSession { id });
        self.notify_changed();
    }

    /// Manual reload of the open session
    pub fn reload_detail(&mut self) {
        if let Some(id) = self.model.detail.requested_id {
            self.open_session(id);
        }
    }

    /// Trigger analysis for the open session
    ///
    /// Fire-and-forget: results show up after a manual reload.
    pub fn analyze_current(&mut self) -> Result<(), ValidationError> {
        let Some(detail) = self.model.detail.detail.as_ref() else {
            return Ok(());
        };
        if !self.model.detail.can_analyze() {
            return Err(ValidationError::AlreadyAnalyzed);
        }

        let session_name = detail.session.name.clone();
        info!("requesting analysis for '{}'", session_name);
        self.model.detail.analysis_requested = true;
        self.send(ApiRequest::TriggerAnalysis { session_name });
        self.notify_changed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{Screenshot, Session, SessionDetail};
    use crate::app::test_support::{drain, test_app};
    use crate::logic::validation::ValidationError;
    use crate::services::api::{ApiRequest, ApiResponse};
    use crate::View;

    fn detail(id: i64, name: &str, analyzed: &[bool]) -> SessionDetail {
        SessionDetail {
            session: Session {
                id,
                name: name.to_string(),
                description: None,
                created_at: String::new(),
                screenshot_count: analyzed.len() as u64,
                analyzed_count: analyzed.iter().filter(|a| **a).count() as u64,
                avg_relevance: 0.0,
            },
            screenshots: analyzed
                .iter()
                .map(|a| Screenshot {
                    id: None,
                    file_path: "data/screenshots/x.png".to_string(),
                    timestamp: None,
                    analyzed: *a,
                    relevance_score: a.then_some(0.5),
                    relevance_display: a.then_some(50),
                    ai_summary: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_open_session_switches_view() {
        let (mut app, mut rx) = test_app();
        app.open_session(4);
        assert_eq!(app.model.view, View::SessionDetail);
        assert!(app.model.detail.state.is_loading());
        assert_eq!(drain(&mut rx), vec![ApiRequest::GetSession { id: 4 }]);
    }

    #[test]
    fn test_analyze_sends_name_not_id() {
        let (mut app, mut rx) = test_app();
        app.open_session(9);
        app.handle_api_response(ApiResponse::SessionResult {
            id: 9,
            detail: Ok(detail(9, "retro", &[false, false])),
        });
        drain(&mut rx);

        assert!(app.model.detail.can_analyze());
        assert!(app.analyze_current().is_ok());
        assert_eq!(
            drain(&mut rx),
            vec![ApiRequest::TriggerAnalysis {
                session_name: "retro".to_string()
            }]
        );
        // No second trigger from the same load
        assert!(!app.model.detail.can_analyze());
    }

    #[test]
    fn test_analyze_disabled_when_anything_analyzed() {
        let (mut app, mut rx) = test_app();
        app.open_session(2);
        app.handle_api_response(ApiResponse::SessionResult {
            id: 2,
            detail: Ok(detail(2, "done", &[true, false])),
        });
        drain(&mut rx);

        assert_eq!(app.analyze_current(), Err(ValidationError::AlreadyAnalyzed));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_analysis_failure_reenables_action() {
        let (mut app, _rx) = test_app();
        app.open_session(3);
        app.handle_api_response(ApiResponse::SessionResult {
            id: 3,
            detail: Ok(detail(3, "fresh", &[])),
        });
        app.analyze_current().unwrap();

        app.handle_api_response(ApiResponse::AnalysisResult {
            session_name: "fresh".to_string(),
            result: Err(anyhow::anyhow!("connection refused")),
        });
        assert!(app.model.detail.can_analyze());
        let (toast, _) = app.model.ui.toast_message.clone().unwrap();
        assert!(toast.starts_with("Error:"));
    }
}
