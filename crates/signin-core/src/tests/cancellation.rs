use crate::CancellationSignal;

use tokio::time::{Duration, timeout};

#[test]
fn given_new_signal_when_checked_then_not_cancelled() {
    let signal = CancellationSignal::new();

    assert!(!signal.is_cancelled());
}

#[test]
fn given_signal_when_cancelled_then_clones_observe_it() {
    let signal = CancellationSignal::new();
    let observer = signal.clone();

    signal.cancel();

    assert!(observer.is_cancelled());
}

#[tokio::test]
async fn given_waiter_when_cancel_triggered_then_waiter_resolves() {
    let signal = CancellationSignal::new();

    let trigger = signal.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        trigger.cancel();
    });

    let result = timeout(Duration::from_millis(500), signal.cancelled()).await;
    assert!(result.is_ok(), "Cancellation should be received");
}

#[tokio::test]
async fn given_already_cancelled_when_waiting_then_resolves_immediately() {
    let signal = CancellationSignal::new();
    signal.cancel();

    let result = timeout(Duration::from_millis(10), signal.cancelled()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_uncancelled_signal_when_waiting_then_still_pending() {
    let signal = CancellationSignal::new();

    let result = timeout(Duration::from_millis(20), signal.cancelled()).await;

    assert!(result.is_err());
}
