use super::*;

#[test]
fn a_fresh_handle_is_live() {
    let handle = start_polling(Duration::from_secs(30), || {});
    assert!(!handle.is_cancelled());
}

#[test]
fn cancel_is_observable() {
    let handle = start_polling(Duration::from_secs(30), || {});
    handle.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let handle = start_polling(Duration::from_secs(30), || {});
    handle.cancel();
    handle.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn clones_observe_the_same_cancellation() {
    let handle = start_polling(Duration::from_secs(30), || {});
    let view = handle.clone();
    handle.cancel();
    assert!(view.is_cancelled());
}

#[test]
fn overview_cadence_is_thirty_seconds() {
    assert_eq!(OVERVIEW_POLL_SECS, 30);
}
