use std::time::{Duration, Instant};

use tracing::trace;

struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// A single scheduled slot.
///
/// Every `submit` replaces whatever was waiting and restarts the quiet
/// window, so only the latest value is ever released. Time is supplied by
/// the caller, which keeps the debouncer free of threads and timers.
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
    generation: u64,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            generation: 0,
        }
    }

    /// Schedule `value`, superseding any pending one. Returns the new
    /// generation, which increases with every call.
    pub fn submit(&mut self, value: T, now: Instant) -> u64 {
        self.generation += 1;
        let superseded = self
            .pending
            .replace(Pending {
                value,
                deadline: now + self.window,
            })
            .is_some();
        trace!(generation = self.generation, superseded, "debounce scheduled");
        self.generation
    }

    /// Release the pending value once its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
