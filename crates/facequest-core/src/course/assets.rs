use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;

/// Decoded lesson image, RGBA8 row-major.
pub struct RgbaAsset {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Resolve an authored asset path against the course file's directory.
/// Absolute paths pass through unchanged.
pub fn resolve(base: Option<&Path>, authored: &str) -> PathBuf {
    let p = Path::new(authored);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    match base {
        Some(dir) => dir.join(p),
        None => p.to_path_buf(),
    }
}

/// Decode a lesson image from disk.
pub fn load_rgba(path: &Path) -> Result<RgbaAsset> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(RgbaAsset {
        width: width as usize,
        height: height as usize,
        pixels: img.into_raw(),
    })
}

/// Like [`load_rgba`], but missing or undecodable imagery is reported and
/// swallowed. Lesson screens fall back to a placeholder; imagery is never a
/// fault.
pub fn try_load_rgba(path: &Path) -> Option<RgbaAsset> {
    match load_rgba(path) {
        Ok(asset) => Some(asset),
        Err(err) => {
            warn!(path = %path.display(), %err, "lesson image unavailable");
            None
        }
    }
}
