//! NoveltyWorker: dedicated thread answering novelty queries.
//!
//! Requests go in through a bounded channel; completions come back on a
//! second channel and are applied by whoever owns the worker. Scoring
//! passes never block on the query itself, and neither does dropping the
//! worker: queued requests are abandoned and an in-flight query finishes
//! on the detached thread.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use contentscore_core::errors::NoveltyError;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};

use super::client::{NoveltyClient, NoveltyRequest};

/// Answer to one request.
#[derive(Debug, Clone)]
pub struct NoveltyCompletion {
    pub keyword: String,
    pub outcome: Result<bool, NoveltyError>,
}

pub struct NoveltyWorker {
    requests: Option<Sender<NoveltyRequest>>,
    completions: Receiver<NoveltyCompletion>,
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    capacity: usize,
}

impl NoveltyWorker {
    /// Start the worker thread with a request queue of `capacity`.
    pub fn spawn(client: Arc<dyn NoveltyClient>, capacity: usize) -> Result<Self, NoveltyError> {
        let capacity = capacity.max(1);
        let (request_tx, request_rx) = bounded::<NoveltyRequest>(capacity);
        let (completion_tx, completion_rx) = unbounded::<NoveltyCompletion>();
        let shutdown = Arc::new(AtomicBool::new(false));

        let thread_shutdown = Arc::clone(&shutdown);
        let handle = std::thread::Builder::new()
            .name("contentscore-novelty".to_string())
            .spawn(move || run(client.as_ref(), request_rx, completion_tx, &thread_shutdown))
            .map_err(|e| NoveltyError::Transport(format!("failed to start worker: {e}")))?;

        Ok(Self {
            requests: Some(request_tx),
            completions: completion_rx,
            handle: Some(handle),
            shutdown,
            capacity,
        })
    }

    /// Queue a request without blocking.
    pub fn submit(&self, request: NoveltyRequest) -> Result<(), NoveltyError> {
        let Some(requests) = &self.requests else {
            return Err(NoveltyError::Disconnected);
        };
        requests.try_send(request).map_err(|e| match e {
            TrySendError::Full(_) => NoveltyError::QueueFull {
                capacity: self.capacity,
            },
            TrySendError::Disconnected(_) => NoveltyError::Disconnected,
        })
    }

    /// Completions that have arrived so far.
    pub fn drain(&self) -> Vec<NoveltyCompletion> {
        self.completions.try_iter().collect()
    }

    /// Next completion, waiting until `deadline` at the latest.
    pub fn recv_until(&self, deadline: Instant) -> Option<NoveltyCompletion> {
        let timeout = deadline.saturating_duration_since(Instant::now());
        self.completions.recv_timeout(timeout).ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<NoveltyCompletion> {
        self.recv_until(Instant::now() + timeout)
    }
}

fn run(
    client: &dyn NoveltyClient,
    requests: Receiver<NoveltyRequest>,
    completions: Sender<NoveltyCompletion>,
    shutdown: &AtomicBool,
) {
    for request in requests.iter() {
        if shutdown.load(Ordering::Acquire) {
            break;
        }
        let start = Instant::now();
        let outcome = catch_unwind(AssertUnwindSafe(|| client.is_keyword_new(&request)))
            .unwrap_or_else(|_| Err(NoveltyError::Transport("novelty client panicked".to_string())))
            .map(|response| response.is_new);
        tracing::debug!(
            keyword = %request.keyword,
            novelty_query_time = start.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            "novelty query finished"
        );
        let completion = NoveltyCompletion {
            keyword: request.keyword,
            outcome,
        };
        if completions.send(completion).is_err() {
            break;
        }
    }
}

impl Drop for NoveltyWorker {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        // Closing the request channel wakes an idle thread.
        self.requests.take();
        let Some(handle) = self.handle.take() else {
            return;
        };
        if handle.is_finished() {
            if handle.join().is_err() {
                tracing::warn!("novelty worker thread panicked");
            }
        } else {
            tracing::debug!("novelty worker detached with a query in flight");
        }
    }
}

impl std::fmt::Debug for NoveltyWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoveltyWorker")
            .field("capacity", &self.capacity)
            .field("running", &self.handle.is_some())
            .finish()
    }
}
