use std::cell::Cell;

use outcome_rail::traits::ResultExt;
use outcome_rail::{DualOutcome, Fault, FaultKind, Outcome};

#[test]
fn into_outcome_converts_errors_into_faults() {
    let ok: Result<u8, &'static str> = Ok(3);
    assert_eq!(ok.into_outcome(), Outcome::from_ok(3));

    let err: Result<u8, std::io::Error> = Err(std::io::Error::other("refused"));
    let out = err.into_outcome();
    assert_eq!(out.error().map(Fault::kind), Some(FaultKind::Source));
}

#[test]
fn outcome_with_maps_lazily() {
    let called = Cell::new(false);
    let ok: Result<u8, u16> = Ok(1);
    let out = ok.outcome_with(|code| {
        called.set(true);
        Fault::new(format!("status {code}"))
    });
    assert_eq!(out, Outcome::from_ok(1));
    assert!(!called.get());

    let err: Result<u8, u16> = Err(404);
    let out = err.outcome_with(|code| Fault::new(format!("status {code}")));
    assert_eq!(out.fail_message().as_deref(), Some("status 404"));
}

#[test]
fn into_dual_keeps_the_error_type() {
    let err: Result<(), u16> = Err(500);
    assert_eq!(err.into_dual(), DualOutcome::from_fail(500));
}
