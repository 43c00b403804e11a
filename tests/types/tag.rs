use outcome_rail::{fail, fail_some, success, wrap, FailTag, Fault, FaultKind, OkTag, Outcome, Status};

#[test]
fn factories_only_carry_the_payload() {
    assert_eq!(success(5), OkTag { value: 5 });
    assert_eq!(fail("gone"), FailTag { value: "gone" });
    assert_eq!(success("id").into_inner(), "id");
}

#[test]
fn success_accepts_absent_values() {
    let out: Outcome<Option<u8>> = success(None).into();
    assert!(out.is_ok());
    assert_eq!(out.value(), Some(&None));
}

#[test]
fn try_new_rejects_absent_payload() {
    let err = FailTag::<Fault>::try_new(None).unwrap_err();
    assert_eq!(err.kind(), FaultKind::InvalidArgument);

    let tag = FailTag::try_new(Some("late")).unwrap();
    let status: Status = tag.into();
    assert_eq!(status, Status::from_fail("late"));
}

#[test]
fn fail_some_with_payload_builds_a_tag() {
    let out: Outcome<()> = fail_some(Some(Fault::from("busy"))).into();
    assert_eq!(out.error(), Some(&Fault::from("busy")));
}

#[test]
fn fail_some_without_payload_raises_invalid_argument() {
    let fault = wrap(|| fail_some::<Fault>(None)).unwrap_fail();
    assert_eq!(fault.kind(), FaultKind::InvalidArgument);
}

#[test]
#[should_panic(expected = "invalid argument: failure payload must not be absent")]
fn fail_some_without_payload_panics_with_readable_message() {
    let _ = fail_some::<&'static str>(None);
}

#[test]
fn into_fault_wraps_strings() {
    assert_eq!(fail("nope").into_fault(), Fault::from("nope"));
    assert_eq!(fail(String::from("nope")).into_fault(), Fault::from("nope"));
}
