use std::collections::VecDeque;

use log::debug;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{BackendClient, CaptureStatus, SearchResult, Session, SessionDetail, Stats};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,    // Background polling
    Medium, // Header refreshes
    High,   // User-initiated actions and view loads
}

/// Which slice a session list is loaded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTarget {
    /// Session list view
    Catalog,
    /// Export selector (only sessions with analyzed screenshots)
    ExportSelector,
}

/// Why a capture status was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOrigin {
    /// Periodic poll tick
    Poll,
    /// Immediate reconciliation after a start/stop or at startup
    Reconcile,
    /// Fresh status the capture toggle decides on
    Toggle,
}

/// API request types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Backend totals
    GetStats,

    /// List all sessions
    ListSessions { target: CatalogTarget },

    /// One session with its screenshots
    GetSession { id: i64 },

    /// Fire-and-forget analysis of a session
    TriggerAnalysis { session_name: String },

    /// Current capture status (never fails)
    GetCaptureStatus { origin: StatusOrigin },

    StartCapture {
        session_name: String,
        description: Option<String>,
    },

    StopCapture,

    Search { query: String },

    /// Blocks until the export finishes
    ExportVideo {
        session_name: String,
        hero_only: bool,
    },
}

impl ApiRequest {
    /// Extract priority from request
    pub fn priority(&self) -> Priority {
        match self {
            ApiRequest::GetCaptureStatus {
                origin: StatusOrigin::Poll,
            } => Priority::Low,
            ApiRequest::GetStats => Priority::Medium,
            _ => Priority::High,
        }
    }

    fn is_poll(&self) -> bool {
        matches!(
            self,
            ApiRequest::GetCaptureStatus {
                origin: StatusOrigin::Poll
            }
        )
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    StatsResult {
        stats: Result<Stats, anyhow::Error>,
    },

    SessionsResult {
        target: CatalogTarget,
        sessions: Result<Vec<Session>, anyhow::Error>,
    },

    SessionResult {
        id: i64,
        detail: Result<SessionDetail, anyhow::Error>,
    },

    AnalysisResult {
        session_name: String,
        result: Result<(), anyhow::Error>,
    },

    CaptureStatusResult {
        origin: StatusOrigin,
        status: CaptureStatus,
    },

    StartCaptureResult {
        session_name: String,
        result: Result<(), anyhow::Error>,
    },

    StopCaptureResult {
        result: Result<(), anyhow::Error>,
    },

    SearchResults {
        query: String,
        results: Result<Vec<SearchResult>, anyhow::Error>,
    },

    ExportResult {
        session_name: String,
        output: Result<String, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed { poll: bool },
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: BackendClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: usize,
    /// A poll is queued or running; further ticks are dropped until it lands
    poll_pending: bool,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub(crate) fn new(
        client: BackendClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: 0,
            poll_pending: false,
            response_tx,
            completion_tx,
            max_concurrent: 8, // Limit concurrent API calls
        }
    }

    /// Add a request to the queue
    fn enqueue(&mut self, request: ApiRequest) {
        // A slow backend must not accumulate a backlog of poll ticks
        if request.is_poll() {
            if self.poll_pending {
                debug!("status poll already pending, dropping tick");
                return;
            }
            self.poll_pending = true;
        }

        let priority = request.priority();

        // Insert based on priority (high priority at front, FIFO within a level)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        self.in_flight += 1;
        let poll = request.is_poll();

        // Clone what we need for the async task
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);

            // Notify service that this request is complete
            let _ = completion_tx.send(InternalMessage::Completed { poll });
        });
    }

    fn complete(&mut self, poll: bool) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if poll {
            self.poll_pending = false;
        }
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &BackendClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::GetStats => ApiResponse::StatsResult {
                stats: client.get_stats().await,
            },

            ApiRequest::ListSessions { target } => ApiResponse::SessionsResult {
                target,
                sessions: client.list_sessions().await,
            },

            ApiRequest::GetSession { id } => {
                debug!("[API Service] fetching session {}", id);
                ApiResponse::SessionResult {
                    id,
                    detail: client.get_session(id).await,
                }
            }

            ApiRequest::TriggerAnalysis { session_name } => {
                let result = client.trigger_analysis(&session_name).await;
                ApiResponse::AnalysisResult {
                    session_name,
                    result,
                }
            }

            ApiRequest::GetCaptureStatus { origin } => ApiResponse::CaptureStatusResult {
                origin,
                status: client.get_capture_status_or_idle().await,
            },

            ApiRequest::StartCapture {
                session_name,
                description,
            } => {
                let result = client
                    .start_capture(&session_name, description.as_deref())
                    .await;
                ApiResponse::StartCaptureResult {
                    session_name,
                    result,
                }
            }

            ApiRequest::StopCapture => ApiResponse::StopCaptureResult {
                result: client.stop_capture().await,
            },

            ApiRequest::Search { query } => {
                let results = client.search(&query).await;
                ApiResponse::SearchResults { query, results }
            }

            ApiRequest::ExportVideo {
                session_name,
                hero_only,
            } => {
                debug!(
                    "[API Service] export started for {} (hero_only={})",
                    session_name, hero_only
                );
                let output = client.export_video(&session_name, hero_only).await;
                ApiResponse::ExportResult {
                    session_name,
                    output,
                }
            }
        }
    }
}

/// Spawn the API service worker
///
/// The worker exits once every request sender has been dropped.
pub fn spawn_api_service(
    client: BackendClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        None => {
                            debug!("[API Service] request channel closed, shutting down");
                            break;
                        }
                    }
                }

                // Handle completion notifications
                Some(InternalMessage::Completed { poll }) = completion_rx.recv() => {
                    service.complete(poll);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
