//! Long-polling update pump.
//!
//! A background task that repeatedly calls `getUpdates`, advances the
//! offset cursor past the highest delivered update id, and republishes
//! each update onto a bounded channel. Backpressure is deliberate: once
//! the channel is full the pump blocks, which also stops the cursor and
//! delays the next fetch.

use crate::errors::TelegramResult;
use crate::services::updates::{GetUpdatesRequest, UpdatesService, UpdatesServiceTrait};
use crate::types::Update;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Retry behavior after a failed fetch
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Pause between retries
    pub delay: Duration,
    /// Give up after this many consecutive failures; unlimited when unset
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /// Set the pause between retries
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Give up after this many consecutive failures
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

/// Options for starting the pump
#[derive(Debug, Clone)]
pub struct PollingOptions {
    /// Initial offset cursor
    pub offset: i64,
    /// Batch size; clamped to 1-100
    pub limit: i64,
    /// Long-poll wait in seconds
    pub timeout: i64,
    /// Update kinds to receive
    pub allowed_updates: Option<Vec<String>>,
    /// Retry behavior after failed fetches
    pub retry: RetryPolicy,
}

impl Default for PollingOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
            timeout: 30,
            allowed_updates: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl PollingOptions {
    /// Start from the given offset
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the batch size
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the long-poll wait
    pub fn timeout(mut self, timeout: i64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry behavior
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Handle to a running update pump.
///
/// Starting the pump yields the only handle and the only receiver;
/// stopping consumes the handle and closes the channel. Dropping the
/// handle without calling [`UpdatesPump::stop`] also winds the task
/// down on its next iteration.
pub struct UpdatesPump {
    shutdown_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl UpdatesPump {
    /// Start polling in a background task.
    ///
    /// Returns the pump handle and the bounded update channel; capacity
    /// equals the clamped batch size.
    pub fn start(service: UpdatesService, options: PollingOptions) -> (Self, mpsc::Receiver<Update>) {
        let limit = options.limit.clamp(1, 100);
        let (tx, rx) = mpsc::channel(limit as usize);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(run_pump(service, options, limit, tx, shutdown_rx));

        (
            Self {
                shutdown_tx,
                handle,
            },
            rx,
        )
    }

    /// Stop the pump and wait for the task to wind down.
    ///
    /// The output channel is closed; nothing is published after the
    /// signal is observed.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.handle.await;
    }
}

impl std::fmt::Debug for UpdatesPump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatesPump")
            .field("running", &!self.handle.is_finished())
            .finish()
    }
}

async fn run_pump(
    service: UpdatesService,
    options: PollingOptions,
    limit: i64,
    tx: mpsc::Sender<Update>,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    let mut offset = options.offset;
    let mut consecutive_errors: u32 = 0;

    info!(offset, limit, "update pump started");

    'pump: loop {
        match shutdown_rx.try_recv() {
            Ok(()) | Err(TryRecvError::Disconnected) => break 'pump,
            Err(TryRecvError::Empty) => {}
        }

        let mut request = GetUpdatesRequest::new()
            .offset(offset)
            .limit(limit)
            .timeout(options.timeout);
        if let Some(kinds) = &options.allowed_updates {
            request = request.allowed_updates(kinds.clone());
        }

        let fetched: TelegramResult<Vec<Update>> = tokio::select! {
            _ = shutdown_rx.recv() => break 'pump,
            result = service.get_updates(request) => result,
        };

        match fetched {
            Ok(updates) => {
                consecutive_errors = 0;
                for update in updates {
                    // Already-seen ids are dropped; the cursor never
                    // moves backwards.
                    if update.update_id < offset {
                        debug!(update_id = update.update_id, offset, "dropping stale update");
                        continue;
                    }
                    offset = update.update_id + 1;

                    tokio::select! {
                        _ = shutdown_rx.recv() => break 'pump,
                        sent = tx.send(update) => {
                            if sent.is_err() {
                                // Receiver is gone; no reason to keep fetching.
                                break 'pump;
                            }
                        }
                    }
                }
            }
            Err(err) => {
                error!(error = %err, "failed to fetch updates");
                consecutive_errors += 1;
                if let Some(max) = options.retry.max_attempts {
                    if consecutive_errors >= max {
                        error!(attempts = consecutive_errors, "giving up after repeated fetch failures");
                        break 'pump;
                    }
                }

                tokio::select! {
                    _ = shutdown_rx.recv() => break 'pump,
                    _ = tokio::time::sleep(options.retry.delay) => {}
                }
            }
        }
    }

    info!(offset, "update pump stopped");
    // Dropping the sender closes the output channel for consumers.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::updates_envelope;
    use crate::mocks::{MockHttpTransport, MockResponse};
    use crate::transport::HttpTransport;
    use std::sync::Arc;

    fn service_with(transport: Arc<MockHttpTransport>) -> UpdatesService {
        UpdatesService::new(transport as Arc<dyn HttpTransport>)
    }

    async fn wait_until(mut condition: impl FnMut() -> bool) {
        for _ in 0..200 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not reached in time");
    }

    #[tokio::test]
    async fn test_pump_publishes_and_advances_offset() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .add_response(MockResponse::ok(updates_envelope(&[1001, 1002])))
                .add_response(MockResponse::ok(updates_envelope(&[1001, 1003])))
                .with_default_response(MockResponse::ok(updates_envelope(&[]))),
        );

        let (pump, mut rx) = UpdatesPump::start(
            service_with(transport.clone()),
            PollingOptions::default().timeout(0),
        );

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(rx.recv().await.expect("update").update_id);
        }

        // Duplicate 1001 from the second batch was dropped; ids are
        // non-decreasing.
        assert_eq!(seen, vec![1001, 1002, 1003]);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));

        // The next fetch carries the advanced cursor.
        let watched = transport.clone();
        wait_until(move || {
            watched
                .recorded_requests()
                .iter()
                .any(|r| r.params.get("offset") == Some("1004"))
        })
        .await;

        pump.stop().await;
    }

    #[tokio::test]
    async fn test_pump_stop_closes_channel() {
        let transport = Arc::new(
            MockHttpTransport::new().with_default_response(MockResponse::ok(updates_envelope(&[]))),
        );

        let (pump, mut rx) = UpdatesPump::start(
            service_with(transport),
            PollingOptions::default().timeout(0),
        );

        pump.stop().await;

        // Draining completes without blocking once the channel closes.
        while let Some(_update) = rx.recv().await {}
    }

    #[tokio::test]
    async fn test_pump_retries_after_error() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .add_response(MockResponse::api_error(500, "Internal Server Error"))
                .with_default_response(MockResponse::ok(updates_envelope(&[7]))),
        );

        let options = PollingOptions::default()
            .timeout(0)
            .retry(RetryPolicy::default().with_delay(Duration::from_millis(5)));
        let (pump, mut rx) = UpdatesPump::start(service_with(transport), options);

        // The failed first fetch is retried and the update still arrives.
        let update = rx.recv().await.expect("update after retry");
        assert_eq!(update.update_id, 7);

        pump.stop().await;
    }

    #[tokio::test]
    async fn test_pump_gives_up_after_max_attempts() {
        let transport = Arc::new(
            MockHttpTransport::new()
                .with_default_response(MockResponse::api_error(500, "Internal Server Error")),
        );

        let options = PollingOptions::default().timeout(0).retry(
            RetryPolicy::default()
                .with_delay(Duration::from_millis(1))
                .with_max_attempts(2),
        );
        let (_pump, mut rx) = UpdatesPump::start(service_with(transport), options);

        // Channel closes on its own once the policy is exhausted.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_pump_limit_is_clamped() {
        let transport = Arc::new(
            MockHttpTransport::new().with_default_response(MockResponse::ok(updates_envelope(&[]))),
        );

        let (pump, _rx) = UpdatesPump::start(
            service_with(transport.clone()),
            PollingOptions::default().limit(500).timeout(0),
        );

        // Give the pump one iteration.
        tokio::time::sleep(Duration::from_millis(20)).await;
        pump.stop().await;

        let recorded = transport.recorded_requests();
        assert!(!recorded.is_empty());
        assert!(recorded.iter().all(|r| r.params.get("limit") == Some("100")));
    }
}
