//! Background task runner for DriftBrowser.
//!
//! Work closures run on background threads; their completion closures are
//! queued on a channel and run only when the owning thread drains them with
//! [`TaskRunner::poll`] or [`TaskRunner::run_next`]. Ordered lanes serialize
//! all tasks submitted under one key, which the store uses to keep mutations
//! of a single URL in submission order.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

type Completion = Box<dyn FnOnce() + Send>;
type Job = Box<dyn FnOnce() + Send>;

/// Shared cancel flag handed out per task.
///
/// Cancelling is advisory for the work closure and binding for the
/// completion: a completion whose token was cancelled never runs, even if
/// the work already finished.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

struct Lane {
    jobs: Sender<Job>,
    worker: JoinHandle<()>,
}

/// Runs work off-thread and routes completions back to the issuing thread.
pub struct TaskRunner {
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    lanes: Mutex<HashMap<String, Lane>>,
}

impl TaskRunner {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = unbounded();
        Self {
            completion_tx,
            completion_rx,
            workers: Mutex::new(Vec::new()),
            lanes: Mutex::new(HashMap::new()),
        }
    }

    /// Submits `work` to a fresh background thread and queues `complete`
    /// with its result.
    pub fn submit<T, E, W, C>(&self, work: W, complete: C) -> CancellationToken
    where
        T: Send + 'static,
        E: Send + 'static,
        W: FnOnce() -> Result<T, E> + Send + 'static,
        C: FnOnce(Result<T, E>) + Send + 'static,
    {
        let token = CancellationToken::new();
        self.submit_cancellable(token.clone(), work, complete);
        token
    }

    /// Submits `work` under an existing token.
    ///
    /// The token is checked before the work runs, after it finishes, and
    /// once more when the completion is drained; cancellation at any of
    /// those points suppresses the completion.
    pub fn submit_cancellable<T, E, W, C>(&self, token: CancellationToken, work: W, complete: C)
    where
        T: Send + 'static,
        E: Send + 'static,
        W: FnOnce() -> Result<T, E> + Send + 'static,
        C: FnOnce(Result<T, E>) + Send + 'static,
    {
        let tx = self.completion_tx.clone();
        let handle = thread::spawn(move || {
            if token.is_cancelled() {
                return;
            }
            let result = work();
            if token.is_cancelled() {
                return;
            }
            let guard = token.clone();
            let completion: Completion = Box::new(move || {
                if !guard.is_cancelled() {
                    complete(result);
                }
            });
            let _ = tx.send(completion);
        });

        let mut workers = self.workers.lock();
        workers.retain(|w| !w.is_finished());
        workers.push(handle);
    }

    /// Submits `work` whose completion is delivered to `target` only if the
    /// target is still alive when the completion drains. A torn-down target
    /// turns the completion into a no-op.
    pub fn submit_with_target<U, T, E, W, C>(
        &self,
        target: &Arc<U>,
        work: W,
        complete: C,
    ) -> CancellationToken
    where
        U: Send + Sync + 'static,
        T: Send + 'static,
        E: Send + 'static,
        W: FnOnce() -> Result<T, E> + Send + 'static,
        C: FnOnce(&U, Result<T, E>) + Send + 'static,
    {
        let weak: Weak<U> = Arc::downgrade(target);
        self.submit(work, move |result| match weak.upgrade() {
            Some(target) => complete(&target, result),
            None => log::debug!("Dropping completion for torn-down target"),
        })
    }

    /// Submits `work` onto the ordered lane for `key`. Tasks sharing one
    /// key run one at a time, in submission order; their completions queue
    /// in the same order.
    pub fn submit_ordered<T, E, W, C>(&self, key: &str, work: W, complete: C)
    where
        T: Send + 'static,
        E: Send + 'static,
        W: FnOnce() -> Result<T, E> + Send + 'static,
        C: FnOnce(Result<T, E>) + Send + 'static,
    {
        let tx = self.completion_tx.clone();
        let job: Job = Box::new(move || {
            let result = work();
            let completion: Completion = Box::new(move || complete(result));
            let _ = tx.send(completion);
        });
        if self.lane_sender(key).send(job).is_err() {
            log::warn!("Ordered lane '{}' is gone; task dropped", key);
        }
    }

    fn lane_sender(&self, key: &str) -> Sender<Job> {
        let mut lanes = self.lanes.lock();
        lanes
            .entry(key.to_string())
            .or_insert_with(|| {
                let (jobs_tx, jobs_rx) = unbounded::<Job>();
                let worker = thread::spawn(move || {
                    while let Ok(job) = jobs_rx.recv() {
                        job();
                    }
                });
                Lane {
                    jobs: jobs_tx,
                    worker,
                }
            })
            .jobs
            .clone()
    }

    /// Runs every queued completion on the calling thread. Returns how many
    /// ran.
    pub fn poll(&self) -> usize {
        let mut delivered = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            completion();
            delivered += 1;
        }
        delivered
    }

    /// Blocks up to `timeout` for one completion and runs it on the calling
    /// thread. Returns whether a completion ran.
    pub fn run_next(&self, timeout: Duration) -> bool {
        match self.completion_rx.recv_timeout(timeout) {
            Ok(completion) => {
                completion();
                true
            }
            Err(_) => false,
        }
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskRunner {
    /// Waits for in-flight work so no thread outlives the runner. Queued
    /// completions that were never drained are discarded.
    fn drop(&mut self) {
        let lanes: Vec<Lane> = self.lanes.lock().drain().map(|(_, lane)| lane).collect();
        for lane in lanes {
            let Lane { jobs, worker } = lane;
            drop(jobs);
            let _ = worker.join();
        }
        let workers: Vec<JoinHandle<()>> = self.workers.lock().drain(..).collect();
        for worker in workers {
            let _ = worker.join();
        }
    }
}
