use anyhow::{Context, Result};
use log::warn;
use reqwest::{Client, Response};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Upper bound on a capture status check; an unanswered check reads as idle
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Helper function to deserialize null as the type's default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub screenshot_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub analyzed_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub avg_relevance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Screenshot {
    #[serde(default)]
    pub id: Option<i64>,
    pub file_path: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub analyzed: bool,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub relevance_display: Option<u32>,
    #[serde(default)]
    pub ai_summary: Option<String>,
}

/// Session with its screenshots embedded (GET /sessions/{id})
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionDetail {
    #[serde(flatten)]
    pub session: Session,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub screenshots: Vec<Screenshot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub session_name: Option<String>,
    #[serde(flatten)]
    pub screenshot: Screenshot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaptureStatus {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub session: Option<String>,
}

impl CaptureStatus {
    /// Status used whenever the backend cannot be asked
    pub fn idle() -> Self {
        Self {
            running: false,
            session: None,
        }
    }

    /// Enforce running=false => no session
    pub fn normalized(self) -> Self {
        if self.running {
            self
        } else {
            Self::idle()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_sessions: u64,
    #[serde(default)]
    pub total_screenshots: u64,
    #[serde(default)]
    pub analyzed_screenshots: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StartCaptureBody<'a> {
    session_name: &'a str,
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportBody<'a> {
    session_name: &'a str,
    hero_only: bool,
}

#[derive(Debug, Deserialize)]
struct ExportResponse {
    #[serde(default)]
    output: String,
}

/// HTTP client for the capture backend
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx reply into an error carrying the body text
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!("API error ({}): {}", status, error_text));
        }
        Ok(response)
    }

    pub async fn get_stats(&self) -> Result<Stats> {
        let response = self
            .client
            .get(self.url("/stats"))
            .send()
            .await
            .context("Failed to fetch stats")?;

        let stats = Self::check(response).await?.json().await?;
        Ok(stats)
    }

    pub async fn list_sessions(&self) -> Result<Vec<Session>> {
        let response = self
            .client
            .get(self.url("/sessions"))
            .send()
            .await
            .context("Failed to list sessions")?;

        let sessions = Self::check(response).await?.json().await?;
        Ok(sessions)
    }

    pub async fn get_session(&self, id: i64) -> Result<SessionDetail> {
        let response = self
            .client
            .get(self.url(&format!("/sessions/{}", id)))
            .send()
            .await
            .context("Failed to fetch session")?;

        let detail = Self::check(response)
            .await?
            .json()
            .await
            .context("Failed to parse session detail")?;
        Ok(detail)
    }

    /// Kick off analysis for a session; the pipeline runs out of process
    pub async fn trigger_analysis(&self, session_name: &str) -> Result<()> {
        let url = self.url(&format!("/analyze/{}", urlencoding::encode(session_name)));
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to trigger analysis")?;

        Self::check(response).await?;
        Ok(())
    }

    pub async fn get_capture_status(&self) -> Result<CaptureStatus> {
        let response = self
            .client
            .get(self.url("/capture/status"))
            .timeout(STATUS_TIMEOUT)
            .send()
            .await
            .context("Failed to fetch capture status")?;

        let status: CaptureStatus = Self::check(response).await?.json().await?;
        Ok(status.normalized())
    }

    /// Capture status that never fails: any error reads as idle
    pub async fn get_capture_status_or_idle(&self) -> CaptureStatus {
        match self.get_capture_status().await {
            Ok(status) => status,
            Err(e) => {
                warn!("capture status unavailable, assuming idle: {:#}", e);
                CaptureStatus::idle()
            }
        }
    }

    pub async fn start_capture(&self, session_name: &str, description: Option<&str>) -> Result<()> {
        let response = self
            .client
            .post(self.url("/capture/start"))
            .json(&StartCaptureBody {
                session_name,
                description,
            })
            .send()
            .await
            .context("Failed to start capture")?;

        Self::check(response).await?;
        Ok(())
    }

    pub async fn stop_capture(&self) -> Result<()> {
        let response = self
            .client
            .post(self.url("/capture/stop"))
            .send()
            .await
            .context("Failed to stop capture")?;

        Self::check(response).await?;
        Ok(())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = self.url(&format!("/search?q={}", urlencoding::encode(query)));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to search")?;

        let results = Self::check(response).await?.json().await?;
        Ok(results)
    }

    /// Blocks until the renderer reports a terminal result
    pub async fn export_video(&self, session_name: &str, hero_only: bool) -> Result<String> {
        let response = self
            .client
            .post(self.url("/export/video"))
            .json(&ExportBody {
                session_name,
                hero_only,
            })
            .send()
            .await
            .context("Failed to export video")?;

        let body: ExportResponse = Self::check(response).await?.json().await?;
        Ok(body.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_detail_parses_embedded_screenshots() {
        let json = r#"{
            "id": 7,
            "name": "standup",
            "description": null,
            "created_at": "2025-03-01T10:00:00",
            "screenshot_count": 2,
            "analyzed_count": 1,
            "avg_relevance": 0.5,
            "screenshots": [
                {"file_path": "data/screenshots/standup/a.png", "analyzed": true,
                 "relevance_score": 0.81, "relevance_display": 81, "ai_summary": "Editor"},
                {"file_path": "data/screenshots/standup/b.png", "analyzed": false}
            ]
        }"#;

        let detail: SessionDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.session.id, 7);
        assert_eq!(detail.session.name, "standup");
        assert_eq!(detail.screenshots.len(), 2);
        assert_eq!(detail.screenshots[0].relevance_display, Some(81));
        assert!(!detail.screenshots[1].analyzed);
        assert!(detail.screenshots[1].ai_summary.is_none());
    }

    #[test]
    fn test_session_detail_null_screenshots() {
        let json = r#"{"id": 1, "name": "empty", "screenshots": null}"#;
        let detail: SessionDetail = serde_json::from_str(json).unwrap();
        assert!(detail.screenshots.is_empty());
        assert_eq!(detail.session.screenshot_count, 0);
    }

    #[test]
    fn test_session_list_tolerates_null_counts() {
        let json = r#"[
            {"id": 1, "name": "raw", "description": null, "created_at": null,
             "screenshot_count": null, "analyzed_count": 0, "avg_relevance": null},
            {"id": 2, "name": "scored", "created_at": "2025-03-01T10:00:00",
             "screenshot_count": 4, "analyzed_count": 4, "avg_relevance": 0.62}
        ]"#;

        let sessions: Vec<Session> = serde_json::from_str(json).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].avg_relevance, 0.0);
        assert_eq!(sessions[0].screenshot_count, 0);
        assert!(sessions[0].created_at.is_empty());
        assert_eq!(sessions[1].analyzed_count, 4);
    }

    #[test]
    fn test_start_capture_body_uses_camel_case() {
        let body = serde_json::to_value(StartCaptureBody {
            session_name: "standup",
            description: Some("daily"),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"sessionName": "standup", "description": "daily"})
        );
    }

    #[test]
    fn test_export_body_uses_camel_case() {
        let body = serde_json::to_value(ExportBody {
            session_name: "standup",
            hero_only: true,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"sessionName": "standup", "heroOnly": true}));
    }

    #[test]
    fn test_capture_status_normalized_drops_session_when_idle() {
        let status = CaptureStatus {
            running: false,
            session: Some("leftover".to_string()),
        };
        assert_eq!(status.normalized(), CaptureStatus::idle());
    }

    #[test]
    fn test_capture_status_normalized_keeps_running() {
        let status = CaptureStatus {
            running: true,
            session: Some("demo".to_string()),
        };
        assert_eq!(status.clone().normalized(), status);
    }

    #[test]
    fn test_search_result_flattens_screenshot() {
        let json = r#"{"session_name": "demo", "file_path": "x.png", "analyzed": true, "relevance_display": 40}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.session_name.as_deref(), Some("demo"));
        assert_eq!(result.screenshot.relevance_display, Some(40));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/stats"), "http://localhost:8000/stats");
    }

    #[tokio::test]
    async fn test_capture_status_or_idle_on_connection_failure() {
        // Port 1 is never listening; the request fails at connect time
        let client = BackendClient::new("http://127.0.0.1:1".to_string());
        let status = client.get_capture_status_or_idle().await;
        assert_eq!(status, CaptureStatus::idle());
    }
}
