use facequest_core::consts::DEFAULT_PASS_THRESHOLD;
use facequest_core::exercise::scoring::evaluate;
use facequest_core::geometry::Point;

fn verdict_for(dx: f32, dy: f32) -> facequest_core::exercise::scoring::MatchVerdict {
    let target = Point::new(100.0, 100.0);
    let overlay = Point::new(100.0 + dx, 100.0 + dy);
    evaluate(overlay, target, DEFAULT_PASS_THRESHOLD)
}

#[test]
fn test_zero_displacement_is_full_match() {
    let v = verdict_for(0.0, 0.0);
    assert_eq!(v.score, 100);
    assert!(v.matched);
}

#[test]
fn test_score_capped_at_100() {
    // 200 / 1.0 = 200, displayed as 100.
    let v = verdict_for(0.5, 0.5);
    assert_eq!(v.score, 100);
}

#[test]
fn test_score_formula_combined_distance() {
    // round(200 / 40) = 5
    let v = verdict_for(20.0, 20.0);
    assert_eq!(v.score, 5);
    // Same sum, same score, regardless of the split across axes.
    assert_eq!(verdict_for(30.0, 10.0).score, 5);
}

#[test]
fn test_score_monotonically_non_increasing() {
    let mut prev = u8::MAX;
    for step in 1..200 {
        let d = step as f32;
        let v = verdict_for(d, d);
        assert!(
            v.score <= prev,
            "score rose from {} to {} at displacement {}",
            prev,
            v.score,
            d
        );
        prev = v.score;
    }
}

#[test]
fn test_both_axes_must_pass() {
    // round(100/20) = 5 > 4.2 on both axes.
    assert!(verdict_for(20.0, 20.0).matched);
    // round(100/30) = 3 fails the x axis despite the identical combined score.
    assert!(!verdict_for(30.0, 10.0).matched);
    assert!(!verdict_for(10.0, 30.0).matched);
}

#[test]
fn test_threshold_boundary() {
    // round(100/22) = 5 passes; round(100/24) = 4 fails.
    assert!(verdict_for(22.0, 22.0).matched);
    assert!(!verdict_for(24.0, 24.0).matched);
}

#[test]
fn test_negative_displacement_is_symmetric() {
    let target = Point::new(100.0, 100.0);
    let left = evaluate(Point::new(80.0, 80.0), target, DEFAULT_PASS_THRESHOLD);
    let right = evaluate(Point::new(120.0, 120.0), target, DEFAULT_PASS_THRESHOLD);
    assert_eq!(left, right);
}

#[test]
fn test_zero_threshold_matches_anywhere_close() {
    // With a non-positive threshold even a distant release passes, which is
    // why validation warns about it.
    let v = evaluate(Point::new(0.0, 0.0), Point::new(90.0, 90.0), 0.0);
    assert!(v.matched);
}
