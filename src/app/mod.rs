//! App Orchestration
//!
//! `App` owns the model, the request channel into the background service and
//! the poller lifecycle. Methods are grouped by component in submodules:
//! - capture: Toggle protocol, start form, stop confirmation
//! - catalog: Session list loads and filtering
//! - detail: Session detail loads and analysis trigger
//! - search: Query submission
//! - export: Export selector and submission
//! - navigation: View switching and list selection

use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::{BackendClient, Screenshot};
use crate::config::Config;
use crate::handlers;
use crate::logic::path::{resolve_screenshot, ScreenshotSource};
use crate::model::Model;
use crate::services::api::{spawn_api_service, ApiRequest, ApiResponse, StatusOrigin};
use crate::services::poller::spawn_status_poller;

pub(crate) mod capture;
pub(crate) mod catalog;
pub(crate) mod detail;
pub(crate) mod export;
pub(crate) mod navigation;
pub(crate) mod search;

pub struct App {
    pub model: Model,

    client: BackendClient,
    config: Config,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    poller: Option<JoinHandle<()>>,
    cancel_token: CancellationToken,

    /// Revision counter bumped on every state change
    changed_tx: watch::Sender<u64>,
}

impl App {
    /// Build the app, start the request service and the status poller
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config) -> Self {
        let client = BackendClient::new(config.base_url.clone());
        let (api_tx, api_rx) = spawn_api_service(client.clone());

        let mut app = Self::with_channels(config, client, api_tx, api_rx);
        app.start_poller();
        app.startup_requests();
        app
    }

    /// Build the app around existing channels without spawning anything
    pub fn with_channels(
        config: Config,
        client: BackendClient,
        api_tx: mpsc::UnboundedSender<ApiRequest>,
        api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    ) -> Self {
        let (changed_tx, _) = watch::channel(0);
        Self {
            model: Model::new(),
            client,
            config,
            api_tx,
            api_rx,
            poller: None,
            cancel_token: CancellationToken::new(),
            changed_tx,
        }
    }

    fn start_poller(&mut self) {
        let handle = spawn_status_poller(
            self.api_tx.clone(),
            self.config.poll_interval(),
            self.cancel_token.clone(),
        );
        self.poller = Some(handle);
    }

    /// Initial loads: status, totals and the default view's data
    pub fn startup_requests(&mut self) {
        self.send(ApiRequest::GetCaptureStatus {
            origin: StatusOrigin::Reconcile,
        });
        self.send(ApiRequest::GetStats);
        let view = self.model.view;
        self.switch_view(view);
    }

    /// Stop the poller and wait for it to finish
    pub async fn shutdown(&mut self) {
        self.cancel_token.cancel();
        if let Some(handle) = self.poller.take() {
            if let Err(e) = handle.await {
                warn!("status poller ended abnormally: {}", e);
            }
        }
    }

    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Subscribe to state-change notifications
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed_tx.subscribe()
    }

    pub(crate) fn notify_changed(&self) {
        self.changed_tx.send_modify(|revision| *revision += 1);
    }

    /// Queue a request for the background service
    pub(crate) fn send(&self, request: ApiRequest) {
        debug!("queueing {:?}", request);
        if self.api_tx.send(request).is_err() {
            warn!("request service is gone; request dropped");
        }
    }

    /// Apply every response that has arrived, without blocking
    ///
    /// Returns how many responses were applied.
    pub fn process_responses(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(response) = self.api_rx.try_recv() {
            self.handle_api_response(response);
            applied += 1;
        }
        applied
    }

    /// Wait for the next response and apply it
    pub async fn next_response(&mut self) -> bool {
        match self.api_rx.recv().await {
            Some(response) => {
                self.handle_api_response(response);
                true
            }
            None => false,
        }
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::api::handle_api_response(self, response);
        self.notify_changed();
    }

    /// Where to fetch a screenshot image from
    pub fn screenshot_source(&self, shot: &Screenshot) -> ScreenshotSource {
        resolve_screenshot(
            &shot.file_path,
            &self.config.storage_root,
            self.client.base_url(),
            &self.config.screenshot_route,
        )
    }

    /// Drop the toast once it has been visible long enough
    pub fn expire_toast(&mut self) {
        if self.model.ui.should_dismiss_toast() {
            self.model.ui.dismiss_toast();
            self.notify_changed();
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// App wired to in-memory channels; the receiver sees every request sent
    pub(crate) fn test_app() -> (App, mpsc::UnboundedReceiver<ApiRequest>) {
        let (api_tx, request_rx) = mpsc::unbounded_channel();
        let (_response_tx, api_rx) = mpsc::unbounded_channel();
        let app = App::with_channels(
            Config::default(),
            BackendClient::new("http://127.0.0.1:1".to_string()),
            api_tx,
            api_rx,
        );
        (app, request_rx)
    }

    pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<ApiRequest>) -> Vec<ApiRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = rx.try_recv() {
            requests.push(request);
        }
        requests
    }
}
