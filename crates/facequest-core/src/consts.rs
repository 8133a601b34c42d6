/// Default per-axis pass threshold for the similarity evaluator.
///
/// A release passes on an axis when `round(100 / distance)` exceeds this
/// value, i.e. when the marker lands within roughly 22 viewport units of the
/// target on that axis. Empirically tuned in the authored exercises; carried
/// as configuration, not re-derived.
pub const DEFAULT_PASS_THRESHOLD: f32 = 4.2;

/// Numerator of the displayed similarity score: `round(200 / (dx + dy))`.
pub const SCORE_NUMERATOR: f32 = 200.0;

/// Numerator of the per-axis pass signal: `round(100 / distance)`.
pub const AXIS_NUMERATOR: f32 = 100.0;

/// Floor applied to each displacement component before taking a reciprocal.
/// An exact overlap must score 100, not raise a division fault.
pub const MIN_DISPLACEMENT: f32 = 1e-3;

/// Displayed similarity scores are capped here.
pub const MAX_SCORE: u8 = 100;

/// Default marker size as a fraction of the viewport width and height.
pub const DEFAULT_MARKER_FRACTION: [f32; 2] = [0.18, 0.18];
