use crate::{SignInOutcome, SignInResult, SignInState};

use log::debug;
use tokio::sync::watch;

/// Single-cell, observable record of the latest sign-in outcome.
///
/// The owner is the only writer; observers hold receivers from `subscribe()`.
/// Every write replaces the whole state and notifies all receivers.
pub struct SignInStateHolder {
    state_tx: watch::Sender<SignInState>,
}

impl SignInStateHolder {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(SignInState::default());
        Self { state_tx }
    }

    /// Replace the state with the one derived from `outcome`.
    pub fn record_result(&self, outcome: &SignInOutcome) {
        let state = SignInState::from(outcome);
        debug!(
            "Recording sign-in result: successful={}, error={:?}",
            state.is_sign_in_successful, state.sign_in_error
        );
        self.state_tx.send_replace(state);
    }

    /// Record a completed attempt. Cancelled attempts leave the state untouched.
    ///
    /// Returns whether the state was replaced.
    pub fn on_sign_in_result(&self, result: SignInResult) -> bool {
        match result.into_outcome() {
            Some(outcome) => {
                self.record_result(&outcome);
                true
            }
            None => {
                debug!("Sign-in cancelled, state unchanged");
                false
            }
        }
    }

    /// Back to the idle state.
    pub fn reset(&self) {
        debug!("Resetting sign-in state");
        self.state_tx.send_replace(SignInState::default());
    }

    /// Get current state.
    pub fn current_state(&self) -> SignInState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SignInState> {
        self.state_tx.subscribe()
    }
}

impl Default for SignInStateHolder {
    fn default() -> Self {
        Self::new()
    }
}
