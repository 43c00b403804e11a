use outcome_rail::{ensure, fail, DualOutcome, Fault, FaultKind, Outcome, Status};

#[test]
fn fail_macro_formats_a_message_fault() {
    let attempt = 3;
    let tag = fail!("retry {} exhausted", attempt);

    assert_eq!(tag.value, Fault::from("retry 3 exhausted"));
    assert_eq!(tag.value.kind(), FaultKind::Message);
}

#[test]
fn fail_macro_converts_into_every_fault_shape() {
    let out: Outcome<u8> = fail!("boom").into();
    let status: Status = fail!("boom").into();
    let dual: DualOutcome<u8, Fault> = fail!("boom").into();

    assert_eq!(out.error(), status.error());
    assert_eq!(dual.error(), out.error());
}

fn checked_div(a: i32, b: i32) -> Outcome<i32> {
    ensure!(b != 0, "cannot divide {a} by zero");
    Outcome::from_ok(a / b)
}

fn validate_name(name: &str) -> Status {
    ensure!(!name.is_empty(), "name is empty");
    ensure!(name.len() <= 8, "name {:?} longer than {} bytes", name, 8);
    Status::success()
}

#[test]
fn ensure_returns_early_on_false_condition() {
    assert_eq!(checked_div(9, 3), Outcome::from_ok(3));
    assert_eq!(
        checked_div(9, 0).fail_message().as_deref(),
        Some("cannot divide 9 by zero")
    );
}

#[test]
fn ensure_works_for_status_returning_functions() {
    assert!(validate_name("alice").is_ok());
    assert_eq!(validate_name("").fail_message().as_deref(), Some("name is empty"));
    assert_eq!(
        validate_name("bartholomew").fail_message().as_deref(),
        Some("name \"bartholomew\" longer than 8 bytes")
    );
}
