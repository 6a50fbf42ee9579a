//! Cooperative cancellation shared between a controller and a running engine

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Capability polled by algorithms at every step boundary
pub trait Cancellable {
    /// Check if cancellation has been requested
    fn is_cancelled(&self) -> bool;

    /// Request cancellation
    fn cancel(&self);
}

/// Shared stop flag
///
/// Clones observe the same flag, so a controller keeps one clone and hands
/// another to the run. The flag stays set until [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token in the running state
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear a previous stop request
    ///
    /// Must happen before the first user-visible mutation of a run.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

/// A token that is never cancelled
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancellable for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn cancel(&self) {}
}
