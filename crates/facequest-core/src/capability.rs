/// Rendering capabilities resolved once at startup, instead of scattering
/// per-platform conditionals through the widgets.
#[derive(Clone, Copy, Debug)]
pub struct RenderCaps {
    /// Whether the drag marker may be drawn with a nested overlay image.
    /// Where false, widgets fall back to a painted marker shape.
    pub nested_marker_image: bool,
}

impl RenderCaps {
    /// Detect capabilities for this process. `FACEQUEST_FLAT_MARKER=1`
    /// forces the painted fallback.
    pub fn detect() -> Self {
        let flat = std::env::var("FACEQUEST_FLAT_MARKER")
            .map(|v| v == "1")
            .unwrap_or(false);
        Self {
            nested_marker_image: !flat,
        }
    }
}

impl Default for RenderCaps {
    fn default() -> Self {
        Self {
            nested_marker_image: true,
        }
    }
}
