use std::cell::Cell;

use outcome_rail::{fail, Fault, Outcome, Status};

#[test]
fn success_has_no_error() {
    let status = Status::success();

    assert!(status.is_ok());
    assert!(status.error().is_none());
    assert!(status.fail_message().is_none());
    assert_eq!(status, Status::default());
}

#[test]
fn failure_from_string_tag_carries_message() {
    let status: Status = fail(String::from("permission denied")).into();

    assert!(status.is_fail());
    assert_eq!(status.fail_message().as_deref(), Some("permission denied"));
    assert_eq!(status.into_error(), Some(Fault::from("permission denied")));
}

#[test]
fn into_parts_destructures() {
    assert_eq!(Status::success().into_parts(), (true, None));
    assert_eq!(
        Status::from_fail("x").into_parts(),
        (false, Some(Fault::from("x")))
    );
}

#[test]
fn map_continues_only_after_success() {
    assert_eq!(Status::success().map(|| 1), Outcome::from_ok(1));

    let called = Cell::new(false);
    let out = Status::from_fail("setup failed").map(|| called.set(true));
    assert!(!called.get());
    assert_eq!(out, Outcome::from_fail("setup failed"));
}

#[test]
fn map_captures_panics() {
    let out: Outcome<u8> = Status::success().map(|| panic!("teardown"));
    assert_eq!(out, Outcome::from_fail(Fault::panicked("teardown")));
}

#[test]
fn flat_map_chains_outcomes() {
    let out = Status::success().flat_map(|| Outcome::<u8>::from_fail("next step"));
    assert_eq!(out, Outcome::from_fail("next step"));
}

#[test]
fn fold_collapses() {
    assert_eq!(Status::success().fold(|| "ok", |_| "fail"), "ok");
    assert_eq!(Status::from_fail("x").fold(|| "ok", |_| "fail"), "fail");
}

#[test]
fn display_forms() {
    assert_eq!(Status::success().to_string(), "Success");
    assert_eq!(Status::from_fail("lost lease").to_string(), "Fail(lost lease)");
}

#[cfg(feature = "serde")]
#[test]
fn status_serializes_as_plain_variants() {
    let json = serde_json::to_string(&Status::success()).unwrap();
    assert_eq!(json, r#""Success""#);

    let failed = Status::from_fail("quota");
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), failed);
}
