use serde::{Deserialize, Serialize};

/// Measured bounding box of the container hosting an exercise, in screen
/// coordinates. Zero until the first layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// False before the first layout pass (or for a degenerate container).
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Geometric center in viewport-relative coordinates.
    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    /// Resolve fractional coordinates against this rect, so authored points
    /// scale with the on-screen container size.
    pub fn resolve(&self, frac: FracPoint) -> Point {
        Point {
            x: frac.x * self.width,
            y: frac.y * self.height,
        }
    }

    /// Convert an absolute screen position to viewport-relative coordinates.
    pub fn to_local(&self, screen: Point) -> Point {
        Point {
            x: screen.x - self.x,
            y: screen.y - self.y,
        }
    }
}

/// A position in viewport-relative coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point expressed as fractional offsets of the viewport (0.0..=1.0 when
/// inside it).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FracPoint {
    pub x: f32,
    pub y: f32,
}

impl FracPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Drag bounds as fractions of the viewport. Authored per exercise and
/// intentionally allowed to be asymmetric around the target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundsFrac {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Default for BoundsFrac {
    /// The whole viewport.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        }
    }
}

impl BoundsFrac {
    /// True when the bounds lie within the unit square and are non-inverted.
    pub fn is_normal(&self) -> bool {
        self.min_x <= self.max_x
            && self.min_y <= self.max_y
            && self.min_x >= 0.0
            && self.min_y >= 0.0
            && self.max_x <= 1.0
            && self.max_y <= 1.0
    }

    /// True when `frac` is inside (or on the edge of) the bounds.
    pub fn contains(&self, frac: FracPoint) -> bool {
        frac.x >= self.min_x && frac.x <= self.max_x && frac.y >= self.min_y && frac.y <= self.max_y
    }

    /// Resolve against a measured viewport.
    pub fn resolve(&self, viewport: &ViewportRect) -> DragBounds {
        DragBounds {
            min_x: self.min_x * viewport.width,
            max_x: self.max_x * viewport.width,
            min_y: self.min_y * viewport.height,
            max_y: self.max_y * viewport.height,
        }
    }
}

/// Absolute drag bounds in viewport-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl DragBounds {
    /// Clamp a released position into the bounds.
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.max(self.min_x).min(self.max_x),
            y: p.y.max(self.min_y).min(self.max_y),
        }
    }
}
