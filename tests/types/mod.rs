use outcome_rail::{fail, success, DualOutcome, Fault, Outcome, Status};

mod outcome;
mod status;
mod tag;

#[test]
fn every_shape_accepts_the_same_tags() {
    let ok: Outcome<u8> = success(1).into();
    let dual_ok: DualOutcome<u8, Fault> = success(1).into();
    assert_eq!(Outcome::from(dual_ok), ok);

    let failed: Outcome<u8> = fail("x").into();
    let status: Status = fail("x").into();
    let dual_failed: DualOutcome<u8, &str> = fail("x").into();

    assert_eq!(failed.error(), status.error());
    assert_eq!(dual_failed.error(), Some(&"x"));
}

#[test]
fn shapes_are_send_and_sync_when_payloads_are() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Fault>();
    assert_send_sync::<Status>();
    assert_send_sync::<Outcome<String>>();
    assert_send_sync::<DualOutcome<Vec<u8>, String>>();
}

#[test]
fn failed_outcome_can_be_shared_across_threads() {
    let shared = std::sync::Arc::new(Outcome::<u32>::from_fail("read-only"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.fail_message().map(|m| m.into_owned()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("read-only"));
    }
}
