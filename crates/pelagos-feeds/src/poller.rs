//! Periodic feed revalidation.
//!
//! Every feed runs as a spawned task that fetches on a fixed interval (or on
//! demand) and publishes whole snapshots over a `watch` channel. A watch
//! channel only ever holds the latest value, so consumers reconcile against
//! the most recent snapshot and intermediate ones are skipped when updates
//! outpace them.

use crate::service::FeedError;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// State of one feed as seen by consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState<T> {
    /// First fetch has not completed yet
    Loading,
    /// Latest successful snapshot
    Ready { data: T, fetched_at: DateTime<Utc> },
    /// No successful fetch yet and the last attempt failed
    Failed { error: String, failed_at: DateTime<Utc> },
}

impl<T> FeedState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// The snapshot data, if a fetch has succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            FeedState::Ready { data, .. } => Some(data),
            _ => None,
        }
    }
}

/// Handle to a running feed task.
///
/// Dropping the handle does not stop the task; call [`shutdown`](FeedHandle::shutdown)
/// for that.
pub struct FeedHandle<T> {
    rx: watch::Receiver<FeedState<T>>,
    refresh_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl<T: Clone> FeedHandle<T> {
    /// A fresh receiver for awaiting snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<FeedState<T>> {
        self.rx.clone()
    }

    /// The current feed state.
    pub fn current(&self) -> FeedState<T> {
        self.rx.borrow().clone()
    }

    /// Whether the first fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        self.rx.borrow().is_loading()
    }

    /// Requests an immediate revalidation. Coalesces with one already queued.
    pub fn refresh(&self) {
        let _ = self.refresh_tx.try_send(());
    }

    /// Stops the feed task.
    pub fn shutdown(self) {
        self.task.abort();
    }
}

/// Spawns a feed task fetching on `period` (first fetch immediately).
///
/// A fetch failure after a successful snapshot keeps the previous snapshot in
/// place (stale data beats no data); the failure is logged. Only a failure
/// before the first success is published as [`FeedState::Failed`].
pub fn spawn_feed<T, F, Fut>(name: &'static str, period: Duration, mut fetch: F) -> FeedHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, FeedError>> + Send,
{
    let (tx, rx) = watch::channel(FeedState::Loading);
    let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                msg = refresh_rx.recv() => {
                    if msg.is_none() {
                        // All handles dropped their refresh sender
                        break;
                    }
                    debug!(feed = name, "On-demand revalidation requested");
                }
            }

            match fetch().await {
                Ok(data) => {
                    debug!(feed = name, "Snapshot refreshed");
                    if tx
                        .send(FeedState::Ready {
                            data,
                            fetched_at: Utc::now(),
                        })
                        .is_err()
                    {
                        break;
                    }
                }
                Err(err) => {
                    warn!(feed = name, error = %err, "Feed fetch failed");
                    let had_data = tx.borrow().data().is_some();
                    if !had_data
                        && tx
                            .send(FeedState::Failed {
                                error: err.to_string(),
                                failed_at: Utc::now(),
                            })
                            .is_err()
                    {
                        break;
                    }
                }
            }
        }
    });

    FeedHandle {
        rx,
        refresh_tx,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_initial_fetch_publishes_snapshot() {
        let handle = spawn_feed("test", Duration::from_secs(3600), || async {
            Ok::<_, FeedError>(vec![1, 2, 3])
        });

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().data(), Some(&vec![1, 2, 3]));
        assert!(!handle.is_loading());
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_refresh_triggers_extra_fetch() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let counter = fetches.clone();
        let handle = spawn_feed("test", Duration::from_secs(3600), move || {
            let counter = counter.clone();
            async move { Ok::<_, FeedError>(counter.fetch_add(1, Ordering::SeqCst)) }
        });

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        handle.refresh();
        rx.changed().await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_failure_before_first_success_is_published() {
        let handle = spawn_feed("test", Duration::from_secs(3600), || async {
            Err::<Vec<i32>, _>(FeedError::RequestFailed {
                reason: "backend down".to_string(),
            })
        });

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert!(matches!(&*rx.borrow(), FeedState::Failed { .. }));
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_snapshot() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let counter = fetches.clone();
        let handle = spawn_feed("test", Duration::from_secs(3600), move || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(vec![42])
                } else {
                    Err(FeedError::RequestFailed {
                        reason: "flaky".to_string(),
                    })
                }
            }
        });

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().data(), Some(&vec![42]));

        handle.refresh();
        // Give the failing fetch time to run; the snapshot must survive it
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(handle.current().data(), Some(&vec![42]));
        handle.shutdown();
    }
}
