//! Capture status poller
//!
//! Asks for the capture status on a fixed interval regardless of the active
//! view. Responses flow through the request service like any other, so the
//! UI loop applies them with the same reconciliation as user-triggered ones.

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::api::{ApiRequest, StatusOrigin};

/// Spawn the poller; it runs until `cancel_token` fires or the service goes away
pub fn spawn_status_poller(
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    poll_interval: Duration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let request = ApiRequest::GetCaptureStatus { origin: StatusOrigin::Poll };
                    if api_tx.send(request).is_err() {
                        debug!("status poller: request channel closed");
                        break;
                    }
                }
                _ = cancel_token.cancelled() => {
                    info!("status poller shutting down");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_poller_ticks_and_cancels() {
        let (api_tx, mut api_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let handle = spawn_status_poller(api_tx, Duration::from_millis(20), cancel.clone());

        // First tick fires immediately, then on the interval
        for _ in 0..2 {
            let request = tokio::time::timeout(Duration::from_secs(5), api_rx.recv())
                .await
                .expect("poller should tick")
                .expect("channel open");
            assert_eq!(
                request,
                ApiRequest::GetCaptureStatus {
                    origin: StatusOrigin::Poll
                }
            );
        }

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("poller should stop after cancel")
            .unwrap();
    }

    #[tokio::test]
    async fn test_poller_stops_when_channel_closed() {
        let (api_tx, api_rx) = mpsc::unbounded_channel();
        drop(api_rx);
        let handle = spawn_status_poller(api_tx, Duration::from_millis(10), CancellationToken::new());

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("poller should exit on closed channel")
            .unwrap();
    }
}
