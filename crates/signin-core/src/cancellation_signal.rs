use std::sync::Arc;

use tokio::sync::watch;

/// Cooperative cancellation flag shared between a caller and the gateway.
///
/// Once cancelled it stays cancelled. Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    cancel_tx: Arc<watch::Sender<bool>>,
}

impl CancellationSignal {
    pub fn new() -> Self {
        let (cancel_tx, _) = watch::channel(false);
        Self {
            cancel_tx: Arc::new(cancel_tx),
        }
    }

    /// Fire the signal. Every pending `cancelled()` resolves.
    pub fn cancel(&self) {
        log::info!("Cancellation requested, abandoning outstanding sign-in calls");
        self.cancel_tx.send_replace(true);
    }

    /// Check if the signal has fired (non-blocking)
    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }

    /// Resolves once the signal fires; immediately if it already has.
    pub async fn cancelled(&self) {
        let mut cancel_rx = self.cancel_tx.subscribe();
        // The sender lives as long as `self`, so this only returns on cancel.
        let _ = cancel_rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}
