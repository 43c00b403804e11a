use std::cell::Cell;

use outcome_rail::{fail, success, wrap, Fallible, Fault, FaultKind, Outcome};

#[test]
fn success_exposes_value_and_no_error() {
    let out: Outcome<i32> = success(10).into();

    assert!(out.is_ok());
    assert!(!out.is_fail());
    assert_eq!(out.value(), Some(&10));
    assert!(out.error().is_none());
    assert!(out.fail_message().is_none());
}

#[test]
fn failure_exposes_error_and_no_value() {
    let out: Outcome<i32> = fail("broken pipe").into();

    assert!(out.is_fail());
    assert!(out.value().is_none());
    assert_eq!(out.error(), Some(&Fault::from("broken pipe")));
    assert_eq!(out.fail_message().as_deref(), Some("broken pipe"));
}

#[test]
fn into_parts_yields_exactly_one_slot() {
    let (ok, value, error) = Outcome::from_ok(3).into_parts();
    assert!(ok);
    assert_eq!(value, Some(3));
    assert!(error.is_none());

    let (ok, value, error) = Outcome::<i32>::from_fail("x").into_parts();
    assert!(!ok);
    assert!(value.is_none());
    assert_eq!(error, Some(Fault::from("x")));
}

#[test]
fn map_transforms_success() {
    let out = Outcome::from_ok("42").map(|s| s.len());
    assert_eq!(out, Outcome::from_ok(2));
}

#[test]
fn map_skips_failures() {
    let called = Cell::new(false);
    let out = Outcome::<i32>::from_fail("stop").map(|x| {
        called.set(true);
        x + 1
    });

    assert!(!called.get());
    assert_eq!(out, Outcome::from_fail("stop"));
}

#[test]
fn map_captures_panics_in_the_closure() {
    let out = Outcome::from_ok(0).map(|divisor: i32| 10 / divisor);

    let fault = out.error().expect("division by zero should be captured");
    assert_eq!(fault.kind(), FaultKind::Panicked);
    assert!(fault.message().contains("divide by zero"));
}

#[test]
fn flat_map_sequences_fallible_steps() {
    let half = |x: i32| {
        if x % 2 == 0 {
            Outcome::from_ok(x / 2)
        } else {
            Outcome::from_fail(format!("{x} is odd"))
        }
    };

    assert_eq!(Outcome::from_ok(8).flat_map(half).flat_map(half), Outcome::from_ok(2));
    assert_eq!(
        Outcome::from_ok(6).flat_map(half).flat_map(half),
        Outcome::from_fail("3 is odd")
    );
}

#[test]
fn flat_map_captures_raised_faults() {
    let fault = Fault::from("inner raise");
    let raised = fault.clone();
    let out: Outcome<i32> = Outcome::from_ok(1).flat_map(move |_| {
        let _: i32 = Outcome::<i32>::from_fail(raised).unwrap();
        Outcome::from_ok(0)
    });

    assert_eq!(out, Outcome::from_fail(fault));
}

#[test]
fn map_fail_recovers_with_a_value() {
    let out = Outcome::<u32>::from_fail("cache miss").map_fail(|fault| {
        assert_eq!(fault.message(), "cache miss");
        0
    });
    assert_eq!(out, Outcome::from_ok(0));

    let untouched = Outcome::from_ok(5u32).map_fail(|_| 0);
    assert_eq!(untouched, Outcome::from_ok(5));
}

#[test]
fn flat_map_fail_can_replace_the_fault() {
    let out = Outcome::<u32>::from_fail("primary down")
        .flat_map_fail(|_| Outcome::from_fail("replica down"));
    assert_eq!(out, Outcome::from_fail("replica down"));

    let recovered = Outcome::<u32>::from_fail("primary down").flat_map_fail(|_| Outcome::from_ok(1));
    assert_eq!(recovered, Outcome::from_ok(1));
}

#[test]
fn map_fail_captures_panics_in_recovery() {
    let out = Outcome::<u32>::from_fail("first").map_fail(|_| panic!("recovery failed"));
    assert_eq!(out, Outcome::from_fail(Fault::panicked("recovery failed")));
}

#[test]
fn select_many_combines_two_successes() {
    let out = Outcome::from_ok(2).select_many(|x| Outcome::from_ok(x + 3), |x, y| x + y);
    assert_eq!(out, Outcome::from_ok(7));
}

#[test]
fn select_many_short_circuits_on_first_failure() {
    let called = Cell::new(false);
    let out = Outcome::<i32>::from_fail("err").select_many(
        |x| {
            called.set(true);
            Outcome::from_ok(x + 3)
        },
        |x, y| x + y,
    );

    assert!(!called.get());
    assert_eq!(out, Outcome::from_fail("err"));
}

#[test]
fn select_many_propagates_selector_failure() {
    let out = Outcome::from_ok(2).select_many(
        |_| Outcome::<i32>::from_fail("second step"),
        |x: i32, y: i32| x + y,
    );
    assert_eq!(out, Outcome::from_fail("second step"));
}

#[test]
#[should_panic(expected = "projection exploded")]
fn select_many_does_not_guard_projection() {
    let _ = Outcome::from_ok(1).select_many(
        |_| Outcome::from_ok(2),
        |_: i32, _: i32| -> i32 { panic!("projection exploded") },
    );
}

#[test]
fn fold_runs_exactly_one_branch() {
    let ok = Outcome::from_ok(4).fold(|v| v * 10, |_| -1);
    assert_eq!(ok, 40);

    let failed = Outcome::<i32>::from_fail("x").fold(|v| v * 10, |f| f.message().len() as i32);
    assert_eq!(failed, 1);
}

#[test]
#[should_panic(expected = "fail_map exploded")]
fn fold_does_not_guard_callbacks() {
    let _: i32 = Outcome::<i32>::from_fail("x").fold(|v| v, |_| panic!("fail_map exploded"));
}

#[test]
fn inspect_only_sees_its_own_branch() {
    let seen = Cell::new(0);
    let _ = Outcome::from_ok(3)
        .inspect(|v| seen.set(*v))
        .inspect_fail(|_| seen.set(-1));
    assert_eq!(seen.get(), 3);

    let _ = Outcome::<i32>::from_fail("x")
        .inspect(|v| seen.set(*v))
        .inspect_fail(|_| seen.set(-1));
    assert_eq!(seen.get(), -1);
}

#[test]
fn unwrap_or_variants_fall_back_on_failure() {
    assert_eq!(Outcome::<u8>::from_fail("x").unwrap_or(9), 9);
    assert_eq!(Outcome::<u8>::from_fail("x").unwrap_or_else(|f| f.message().len() as u8), 1);
    assert_eq!(Outcome::<u8>::from_fail("x").unwrap_or_default(), 0);
    assert_eq!(Outcome::from_ok(2u8).unwrap_or(9), 2);
}

#[test]
fn unwrap_fail_on_success_raises_invalid_operation() {
    let fault = wrap(|| Outcome::from_ok(1).unwrap_fail()).unwrap_fail();
    assert_eq!(fault.kind(), FaultKind::InvalidOperation);

    assert_eq!(Outcome::<u8>::from_fail("x").unwrap_fail(), Fault::from("x"));
}

#[test]
fn as_ref_borrows_success() {
    let out = Outcome::from_ok(String::from("abc"));
    assert_eq!(out.as_ref().map(|s| s.len()), Outcome::from_ok(3));
    assert!(out.is_ok());
}

#[test]
fn display_matches_success_and_fail_forms() {
    assert_eq!(Outcome::from_ok(12).to_string(), "Success(12)");
    assert_eq!(Outcome::<i32>::from_fail("bad input").to_string(), "Fail(bad input)");
}

#[test]
fn collect_stops_at_first_failure() {
    let steps = Cell::new(0);
    let inputs = vec![
        Outcome::from_ok(1),
        Outcome::from_fail("second"),
        Outcome::from_ok(3),
    ];
    let collected: Outcome<Vec<i32>> = inputs
        .into_iter()
        .inspect(|_| steps.set(steps.get() + 1))
        .collect();

    assert_eq!(collected, Outcome::from_fail("second"));
    assert_eq!(steps.get(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn outcome_serializes_as_plain_variants() {
    let ok = Outcome::from_ok(5);
    let json = serde_json::to_string(&ok).unwrap();
    assert_eq!(json, r#"{"Success":5}"#);
    assert_eq!(serde_json::from_str::<Outcome<i32>>(&json).unwrap(), ok);

    let failed = Outcome::<i32>::from_fail("timeout");
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(json, r#"{"Failure":{"kind":"message","message":"timeout"}}"#);
    assert_eq!(serde_json::from_str::<Outcome<i32>>(&json).unwrap(), failed);
}
