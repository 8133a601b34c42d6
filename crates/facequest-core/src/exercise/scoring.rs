use crate::consts::{AXIS_NUMERATOR, MAX_SCORE, MIN_DISPLACEMENT, SCORE_NUMERATOR};
use crate::geometry::Point;

/// Outcome of a single marker release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchVerdict {
    /// Displayed similarity, 0..=100.
    pub score: u8,
    pub matched: bool,
}

/// Score a marker release against the resolved target.
///
/// The displayed score uses the combined distance, `min(round(200 / (dx +
/// dy)), 100)`, while the pass verdict requires `round(100 / d) > threshold`
/// on each axis independently. The two deliberately disagree: a release can
/// show a decent score on one axis alone yet still fail. Both behaviors are
/// user-facing and must not be unified into a single radius test.
pub fn evaluate(overlay: Point, target: Point, threshold: f32) -> MatchVerdict {
    let dx = displacement(overlay.x, target.x);
    let dy = displacement(overlay.y, target.y);

    let raw = (SCORE_NUMERATOR / (dx + dy)).round();
    let score = if raw >= MAX_SCORE as f32 {
        MAX_SCORE
    } else {
        raw as u8
    };

    let matched = axis_signal(dx) > threshold && axis_signal(dy) > threshold;

    MatchVerdict { score, matched }
}

/// Absolute displacement on one axis, floored so reciprocals stay finite.
fn displacement(a: f32, b: f32) -> f32 {
    (a - b).abs().max(MIN_DISPLACEMENT)
}

/// Per-axis pass signal: `round(100 / distance)`.
fn axis_signal(distance: f32) -> f32 {
    (AXIS_NUMERATOR / distance).round()
}
