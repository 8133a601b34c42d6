use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::exercise::scoring::{evaluate, MatchVerdict};
use crate::geometry::{BoundsFrac, FracPoint, Point, ViewportRect};

/// Unmatched/Matched status of an exercise instance. `Matched` is terminal:
/// the marker stops responding to input and keeps its last position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchState {
    #[default]
    Unmatched,
    Matched,
}

/// Authored feedback strings surfaced to the hosting screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HintText {
    pub unmatched: String,
    pub matched: String,
}

/// One target-matching exercise instance.
///
/// Owns the marker position, the match state, and the last verdict. All
/// transitions happen synchronously inside [`MatchSession::set_viewport`]
/// (layout probe) and [`MatchSession::release`] (drag release); reading any
/// accessor never mutates state, so re-renders are stable.
#[derive(Clone, Debug)]
pub struct MatchSession {
    target: FracPoint,
    bounds: BoundsFrac,
    threshold: f32,
    hints: HintText,

    viewport: ViewportRect,
    overlay: Point,
    state: MatchState,
    last_verdict: MatchVerdict,
    externally_locked: bool,
}

impl MatchSession {
    pub fn new(target: FracPoint, bounds: BoundsFrac, threshold: f32, hints: HintText) -> Self {
        Self {
            target,
            bounds,
            threshold,
            hints,
            viewport: ViewportRect::default(),
            overlay: Point::default(),
            state: MatchState::Unmatched,
            last_verdict: MatchVerdict::default(),
            externally_locked: false,
        }
    }

    /// Layout probe input, called on every layout pass. The first real
    /// measurement centers the marker; later measurements (resize, rotation)
    /// re-clamp it into the rescaled bounds. The target itself is stored as
    /// fractions, so it rescales implicitly.
    pub fn set_viewport(&mut self, rect: ViewportRect) {
        if rect == self.viewport {
            return;
        }
        let first = !self.viewport.is_measured();
        self.viewport = rect;
        if !rect.is_measured() {
            return;
        }
        if first {
            self.overlay = rect.center();
        } else {
            self.overlay = self.bounds.resolve(&rect).clamp(self.overlay);
        }
    }

    /// Handle a drag release at an absolute screen position.
    ///
    /// Ignored while locked. The raw position is converted to
    /// viewport-relative coordinates, clamped into the authored bounds, and
    /// scored against the resolved target. An unmeasured viewport evaluates
    /// to score 0, unmatched, and leaves the marker untouched.
    pub fn release(&mut self, raw: Point) -> MatchVerdict {
        if self.locked() {
            return self.last_verdict;
        }
        if !self.viewport.is_measured() {
            self.last_verdict = MatchVerdict::default();
            return self.last_verdict;
        }

        let local = self.viewport.to_local(raw);
        self.overlay = self.bounds.resolve(&self.viewport).clamp(local);

        let target = self.viewport.resolve(self.target);
        let verdict = evaluate(self.overlay, target, self.threshold);
        if verdict.matched {
            debug!(score = verdict.score, "exercise matched");
            self.state = MatchState::Matched;
        }
        self.last_verdict = verdict;
        verdict
    }

    /// External already-solved override from the hosting screen.
    pub fn lock(&mut self) {
        self.externally_locked = true;
    }

    pub fn locked(&self) -> bool {
        self.externally_locked || self.state == MatchState::Matched
    }

    pub fn matched(&self) -> bool {
        self.state == MatchState::Matched
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Verdict-dependent feedback text for the hosting screen.
    pub fn hint(&self) -> &str {
        match self.state {
            MatchState::Matched => &self.hints.matched,
            MatchState::Unmatched => &self.hints.unmatched,
        }
    }

    /// Marker position in viewport-relative coordinates.
    pub fn overlay(&self) -> Point {
        self.overlay
    }

    pub fn viewport(&self) -> ViewportRect {
        self.viewport
    }

    pub fn last_verdict(&self) -> MatchVerdict {
        self.last_verdict
    }
}
