//! API Response Handler
//!
//! Applies responses from the background request service to the model.
//! Every failure is converted into a view state or a toast here; nothing
//! propagates further.

use log::{debug, info, warn};

use crate::logic;
use crate::logic::errors::{describe_error, failure_message};
use crate::model::export::ExportOutcome;
use crate::model::search::SearchState;
use crate::model::LoadState;
use crate::services::api::{ApiResponse, CatalogTarget, StatusOrigin};
use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - StatsResult: Header totals
/// - SessionsResult: Session list for the catalog or the export selector
/// - SessionResult: Session detail with screenshots
/// - AnalysisResult: Analysis accepted (or not) by the backend
/// - CaptureStatusResult: Poll or reconciliation answer
/// - StartCaptureResult / StopCaptureResult: Capture mutations
/// - SearchResults: Search outcome
/// - ExportResult: Terminal export result
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::StatsResult { stats } => match stats {
            Ok(stats) => app.model.stats = Some(stats),
            // Keep showing the last totals; the header is informational
            Err(e) => warn!("stats refresh failed: {:#}", e),
        },

        ApiResponse::SessionsResult { target, sessions } => {
            handle_sessions(app, target, sessions);
        }

        ApiResponse::SessionResult { id, detail } => {
            // Only the most recently requested session may land in the detail view
            if app.model.detail.requested_id != Some(id) {
                debug!(
                    "[SessionResult] dropping stale detail for {} (open: {:?})",
                    id, app.model.detail.requested_id
                );
                return;
            }

            let detail_model = &mut app.model.detail;
            match detail {
                Ok(detail) => {
                    detail_model.stats = logic::detail::compute_stats(&detail.screenshots);
                    detail_model.selected_screenshot = logic::catalog::clamp_selection(
                        detail_model.selected_screenshot,
                        detail.screenshots.len(),
                    );
                    detail_model.detail = Some(detail);
                    detail_model.state = LoadState::Loaded;
                }
                Err(e) => {
                    detail_model.detail = None;
                    detail_model.selected_screenshot = None;
                    detail_model.stats = Default::default();
                    detail_model.state = LoadState::Failed(describe_error(&e));
                }
            }
        }

        ApiResponse::AnalysisResult {
            session_name,
            result,
        } => match result {
            Ok(()) => {
                info!("analysis started for {}", session_name);
                app.model.show_toast(format!(
                    "Analysis started for '{}'. Reload (r) later to see results.",
                    session_name
                ));
            }
            Err(e) => {
                // Let the user try again
                if app.model.detail.detail.as_ref().map(|d| d.session.name.as_str())
                    == Some(session_name.as_str())
                {
                    app.model.detail.analysis_requested = false;
                }
                app.model.show_toast(format!(
                    "Error: {}",
                    failure_message("start analysis", &describe_error(&e))
                ));
            }
        },

        ApiResponse::CaptureStatusResult { origin, status } => {
            debug!("[CaptureStatus] {:?}: {:?}", origin, status);
            if origin == StatusOrigin::Toggle {
                app.model.capture.toggle_pending = false;
                app.apply_toggle(status);
            } else {
                app.model.capture.apply_status(status);
            }
        }

        ApiResponse::StartCaptureResult {
            session_name,
            result,
        } => {
            app.model.capture.mutation_pending = false;
            match result {
                Ok(()) => {
                    info!("capture started: {}", session_name);
                    app.model.show_toast(format!("Recording '{}'", session_name));
                }
                Err(e) => {
                    app.model.show_toast(format!(
                        "Error: {}",
                        failure_message("start capture", &describe_error(&e))
                    ));
                }
            }
            // The backend decides what actually happened
            app.refresh_after_capture_change();
        }

        ApiResponse::StopCaptureResult { result } => {
            app.model.capture.mutation_pending = false;
            match result {
                Ok(()) => {
                    info!("capture stopped");
                    app.model.show_toast("Recording stopped".to_string());
                }
                Err(e) => {
                    app.model.show_toast(format!(
                        "Error: {}",
                        failure_message("stop capture", &describe_error(&e))
                    ));
                }
            }
            app.refresh_after_capture_change();
        }

        ApiResponse::SearchResults { query, results } => {
            if app.model.search.submitted.as_deref() != Some(query.as_str()) {
                debug!("[SearchResults] dropping stale results for {:?}", query);
                return;
            }

            let search = &mut app.model.search;
            search.state = match results {
                Ok(results) if results.is_empty() => SearchState::NoResults,
                Ok(results) => SearchState::Results(results),
                Err(e) => SearchState::Failed(describe_error(&e)),
            };
            search.selected = logic::catalog::clamp_selection(None, search.results().len());
        }

        ApiResponse::ExportResult {
            session_name,
            output,
        } => {
            let export = &mut app.model.export;
            // Released on every outcome
            export.in_flight = false;
            export.outcome = Some(match output {
                Ok(output) => {
                    info!("export finished for {}", session_name);
                    ExportOutcome::Success(output)
                }
                Err(e) => ExportOutcome::Failed(failure_message(
                    &format!("export '{}'", session_name),
                    &describe_error(&e),
                )),
            });
        }
    }
}

fn handle_sessions(
    app: &mut App,
    target: CatalogTarget,
    sessions: Result<Vec<crate::api::Session>, anyhow::Error>,
) {
    match target {
        CatalogTarget::Catalog => {
            let catalog = &mut app.model.catalog;
            match sessions {
                Ok(sessions) => {
                    catalog.sessions = sessions;
                    catalog.state = LoadState::Loaded;
                }
                Err(e) => {
                    warn!("session list failed: {:#}", e);
                    catalog.sessions.clear();
                    catalog.state = LoadState::Failed(describe_error(&e));
                }
            }
            let visible = catalog.visible().len();
            catalog.selected = logic::catalog::clamp_selection(catalog.selected, visible);
        }

        CatalogTarget::ExportSelector => {
            let export = &mut app.model.export;
            match sessions {
                Ok(sessions) => {
                    // Keep the same session selected if it is still exportable
                    let previous = export.selected_session().map(|s| s.id);
                    export.choices = logic::catalog::exportable_sessions(sessions);
                    export.selected = previous
                        .and_then(|id| export.choices.iter().position(|s| s.id == id));
                    export.state = LoadState::Loaded;
                }
                Err(e) => {
                    warn!("export selector load failed: {:#}", e);
                    export.choices.clear();
                    export.selected = None;
                    export.state = LoadState::Failed(describe_error(&e));
                }
            }
        }
    }
}
