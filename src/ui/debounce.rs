//! Single-slot trailing-edge debounce timer.
//!
//! Each `schedule` aborts the pending task, if any, and starts a fresh one,
//! so only the last call within the delay window fires. Dropping the
//! debouncer aborts whatever is still pending.
//!
//! A firing that already left the task (e.g. an event queued in a channel)
//! cannot be aborted. Every firing therefore carries the generation it was
//! scheduled under, and the owner accepts it through `claim`, which rejects
//! any generation superseded by a later `schedule` or `cancel`.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct Debouncer {
    runtime: Handle,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl Debouncer {
    pub fn new(runtime: Handle, delay: Duration) -> Self {
        Self {
            runtime,
            delay,
            pending: None,
            generation: 0,
        }
    }

    /// Run `fire` with this schedule's generation once `delay` has passed
    /// without another `schedule`.
    pub fn schedule<F>(&mut self, fire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let generation = self.generation;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            fire(generation);
        }));
    }

    /// Abort the pending task and invalidate any firing already in flight.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    /// Accept the firing tagged `generation`.
    ///
    /// Returns false when a later `schedule` or `cancel` superseded it, or
    /// when it was already claimed.
    pub fn claim(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
