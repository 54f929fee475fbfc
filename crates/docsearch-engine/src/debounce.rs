//! Debounced query scheduling.
//!
//! Input events arrive faster than searches should run. Each submission
//! schedules a search after a quiescence delay and cancels whatever was
//! pending; sequence numbers guard against a stale task publishing after
//! a newer submission has been issued.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use docsearch_core::error::Error;
use docsearch_core::traits::SearchEngine;
use docsearch_core::types::{Document, Query};

/// Quiescence delay between the last input change and the search.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// The latest applied search, as published to the display side.
#[derive(Debug, Clone)]
pub struct SearchUpdate {
    pub seq: u64,
    pub query: Query,
    pub outcome: Result<Vec<Document>, Arc<Error>>,
}

/// Schedules searches against an engine, one per quiescence window.
///
/// Invariant: only the outcome of the most recently submitted query is
/// applied. A pending task is aborted on resubmission, and a task that
/// slips past the abort re-checks the sequence counter before publishing.
pub struct QueryDebouncer<E: SearchEngine + 'static> {
    engine: Arc<E>,
    delay: Duration,
    seq: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    tx: watch::Sender<SearchUpdate>,
}

impl<E: SearchEngine + 'static> QueryDebouncer<E> {
    pub fn new(engine: Arc<E>, delay: Duration) -> Self {
        let initial = SearchUpdate { seq: 0, query: Query::default(), outcome: Ok(Vec::new()) };
        let (tx, _rx) = watch::channel(initial);
        Self {
            engine,
            delay,
            seq: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            tx,
        }
    }

    /// Watch the stream of applied results. Values carry the sequence
    /// number they answer, so a display can cross-check with [`latest`].
    ///
    /// [`latest`]: QueryDebouncer::latest
    pub fn subscribe(&self) -> watch::Receiver<SearchUpdate> {
        self.tx.subscribe()
    }

    /// Sequence number of the most recent submission.
    pub fn latest(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }

    /// Record a new input state. The previously scheduled search, if any,
    /// is cancelled; the new one runs after the quiescence delay. Returns
    /// the sequence number of this submission.
    pub fn submit(&self, query: Query) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
            tracing::trace!(seq, "superseded pending search");
        }

        let engine = Arc::clone(&self.engine);
        let latest = Arc::clone(&self.seq);
        let tx = self.tx.clone();
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if latest.load(Ordering::SeqCst) != seq {
                tracing::trace!(seq, reason = %Error::Cancelled, "stale search dropped");
                return;
            }
            let outcome = engine.search(&query).map_err(Arc::new);
            // Re-check under the channel lock: a submission that raced the
            // search must win, even though its abort came too late.
            tx.send_if_modified(|slot| {
                if latest.load(Ordering::SeqCst) != seq {
                    return false;
                }
                *slot = SearchUpdate { seq, query, outcome };
                true
            });
        }));
        seq
    }

    /// Wait until the update for `seq` is applied. Returns
    /// `Error::Cancelled` when a newer submission superseded `seq` before
    /// its result could be published.
    pub async fn applied(&self, seq: u64) -> Result<SearchUpdate, Error> {
        let mut rx = self.subscribe();
        loop {
            {
                let update = rx.borrow_and_update();
                if update.seq == seq {
                    return Ok(update.clone());
                }
                if update.seq > seq || self.latest() > seq {
                    return Err(Error::Cancelled);
                }
            }
            if rx.changed().await.is_err() {
                return Err(Error::Cancelled);
            }
        }
    }
}
