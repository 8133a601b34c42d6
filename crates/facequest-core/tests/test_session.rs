use facequest_core::consts::DEFAULT_PASS_THRESHOLD;
use facequest_core::exercise::session::{HintText, MatchSession, MatchState};
use facequest_core::geometry::{BoundsFrac, FracPoint, Point, ViewportRect};

fn hints() -> HintText {
    HintText {
        unmatched: "keep looking".into(),
        matched: "found it".into(),
    }
}

fn centered_session() -> MatchSession {
    MatchSession::new(
        FracPoint::new(0.5, 0.5),
        BoundsFrac::default(),
        DEFAULT_PASS_THRESHOLD,
        hints(),
    )
}

#[test]
fn test_first_measure_centers_marker() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    assert_eq!(s.overlay(), Point::new(150.0, 75.0));
}

#[test]
fn test_release_before_layout_is_safe() {
    let mut s = centered_session();
    let v = s.release(Point::new(150.0, 75.0));
    assert_eq!(v.score, 0);
    assert!(!v.matched);
    assert_eq!(s.state(), MatchState::Unmatched);
}

#[test]
fn test_end_to_end_center_target() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    assert_eq!(s.hint(), "keep looking");

    let v = s.release(Point::new(150.0, 75.0));
    assert_eq!(v.score, 100);
    assert!(v.matched);
    assert_eq!(s.state(), MatchState::Matched);
    assert_eq!(s.hint(), "found it");
}

#[test]
fn test_release_subtracts_viewport_origin() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(40.0, 60.0, 300.0, 150.0));
    // Screen position of the target is origin + (150, 75).
    let v = s.release(Point::new(190.0, 135.0));
    assert!(v.matched);
}

#[test]
fn test_clamp_far_release_to_min_corner() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    s.release(Point::new(-1000.0, -1000.0));
    assert_eq!(s.overlay(), Point::new(0.0, 0.0));
}

#[test]
fn test_clamp_respects_asymmetric_bounds() {
    let mut s = MatchSession::new(
        FracPoint::new(0.5, 0.4),
        BoundsFrac {
            min_x: 0.25,
            max_x: 0.8,
            min_y: 0.1,
            max_y: 0.6,
        },
        DEFAULT_PASS_THRESHOLD,
        hints(),
    );
    s.set_viewport(ViewportRect::new(0.0, 0.0, 200.0, 100.0));

    s.release(Point::new(1000.0, 1000.0));
    assert_eq!(s.overlay(), Point::new(160.0, 60.0));

    s.release(Point::new(-1000.0, -1000.0));
    assert_eq!(s.overlay(), Point::new(50.0, 10.0));
}

#[test]
fn test_match_locks_session() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    let first = s.release(Point::new(150.0, 75.0));
    assert!(first.matched);
    let locked_pos = s.overlay();

    // Further releases are ignored entirely.
    let again = s.release(Point::new(0.0, 0.0));
    assert_eq!(again, first);
    assert_eq!(s.overlay(), locked_pos);
    assert_eq!(s.state(), MatchState::Matched);
}

#[test]
fn test_external_lock_suppresses_input() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    s.lock();
    assert!(s.locked());

    let v = s.release(Point::new(150.0, 75.0));
    assert!(!v.matched);
    assert_eq!(s.overlay(), Point::new(150.0, 75.0));
    assert_eq!(s.state(), MatchState::Unmatched);
}

#[test]
fn test_failed_release_keeps_unmatched_hint() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    let v = s.release(Point::new(0.0, 0.0));
    assert!(!v.matched);
    assert_eq!(s.state(), MatchState::Unmatched);
    assert_eq!(s.hint(), "keep looking");
}

#[test]
fn test_resize_rescales_target() {
    let mut s = centered_session();
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    // Miss badly at the small size.
    assert!(!s.release(Point::new(10.0, 10.0)).matched);

    // After doubling, the target sits at (300, 150).
    s.set_viewport(ViewportRect::new(0.0, 0.0, 600.0, 300.0));
    let v = s.release(Point::new(300.0, 150.0));
    assert_eq!(v.score, 100);
    assert!(v.matched);
}

#[test]
fn test_remeasure_reclamps_marker() {
    let mut s = MatchSession::new(
        FracPoint::new(0.25, 0.25),
        BoundsFrac {
            min_x: 0.0,
            max_x: 0.5,
            min_y: 0.0,
            max_y: 0.5,
        },
        DEFAULT_PASS_THRESHOLD,
        hints(),
    );
    s.set_viewport(ViewportRect::new(0.0, 0.0, 300.0, 150.0));
    s.release(Point::new(140.0, 70.0));
    assert_eq!(s.overlay(), Point::new(140.0, 70.0));

    // Shrinking the container pulls the marker back inside the bounds.
    s.set_viewport(ViewportRect::new(0.0, 0.0, 200.0, 100.0));
    assert_eq!(s.overlay(), Point::new(100.0, 50.0));
}
