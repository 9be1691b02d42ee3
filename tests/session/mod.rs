use optimizer_hints::hints::HintSet;
use optimizer_hints::session::OptimizerSession;
use std::sync::Arc;
use std::thread;

#[test]
fn test_session_hands_out_one_shared_instance() {
    let session = OptimizerSession::new(HintSet::new(
        1, 2, 3, 4, 5, true, 6, 7, 8, 9, 10, false, true,
    ));

    let for_join_search = Arc::clone(session.hints());
    let for_dml_planning = Arc::clone(session.hints());

    // Both components read the same allocation, not copies
    assert!(Arc::ptr_eq(&for_join_search, &for_dml_planning));
    assert_eq!(for_join_search.join_order_dp_limit(), 4);
    assert_eq!(for_dml_planning.delete_dop_cap(), 10);
}

#[test]
fn test_default_session_matches_baseline() {
    let session = OptimizerSession::with_default_hints();

    assert_eq!(session.hints().as_ref(), &HintSet::default());
}

#[test]
fn test_sessions_are_independent() {
    let s1 = OptimizerSession::with_default_hints();
    let s2 = OptimizerSession::with_default_hints();

    assert_ne!(s1.id(), s2.id());
    assert!(!Arc::ptr_eq(s1.hints(), s2.hints()));
    assert_eq!(s1.hints().as_ref(), s2.hints().as_ref());
}

#[test]
fn test_hints_outlive_handles_across_threads() {
    let session = OptimizerSession::new(HintSet::new(
        1, 2, 3, 4, 5, true, 6, 7, 8, 9, 10, false, true,
    ));

    // Each planning component gets its own clone of the handle
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hints = Arc::clone(session.hints());
            thread::spawn(move || {
                for _ in 0..1_000 {
                    assert_eq!(hints.broadcast_threshold(), 5);
                    assert!(hints.enforce_constraints_on_dml());
                    assert!(!hints.remove_update_redundant_motion());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Session still owns a live handle afterwards
    assert_eq!(session.hints().select_dop_cap(), 9);
}
