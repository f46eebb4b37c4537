//! Cancellation handle for in-flight calls.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::channel::{Receiver, Sender, unbounded};

/// Cancels the executor it was taken from.
///
/// Rust threads carry no ambient interrupt status, so interruption is an
/// explicit handle: clone the token to another thread and call
/// [`cancel`](CancelToken::cancel). The owning executor observes the token
/// before dispatching work and while blocked at the collect barrier. Once
/// cancelled, a token stays cancelled and every later call on its executor
/// fails fast.
#[derive(Debug, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    signal_tx: Sender<()>,
    signal_rx: Receiver<()>,
}

impl CancelToken {
    pub(crate) fn new() -> Self {
        let (signal_tx, signal_rx) = unbounded();
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            signal_tx,
            signal_rx,
        }
    }

    /// Cancel the executor. Wakes a call blocked on worker results.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let _ = self.signal_tx.send(());
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Channel endpoint the collect barrier selects on.
    pub(crate) fn receiver(&self) -> &Receiver<()> {
        &self.signal_rx
    }
}
