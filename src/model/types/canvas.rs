//! Module implementing the `CanvasSpec` type.

use crate::model::constants::{CAPTION_RATIO, DEFAULT_CANVAS_WIDTH};


/// Geometry of the final meme canvas, derived entirely from its width.
///
/// The canvas has a fixed 5:6 aspect ratio, with the top slice
/// (a fixed fraction of the height) reserved for the caption
/// and the rest filled by the cover-cropped photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Width of the canvas, in pixels.
    pub width: u32,
    /// Height of the canvas (`width * 6 / 5`).
    pub height: u32,
    /// Height of the caption region at the top of the canvas.
    pub caption_height: u32,
    /// Height of the photo region below the caption region.
    pub photo_height: u32,
}

impl CanvasSpec {
    /// Derive the canvas geometry for given width.
    ///
    /// Width must be at least 4 pixels so that both regions are non-empty.
    pub fn of_width(width: u32) -> Self {
        assert!(width >= 4, "canvas width too small: {}", width);
        let height = width * 6 / 5;
        let caption_height = (height as f32 * CAPTION_RATIO).round() as u32;
        let photo_height = height - caption_height;
        CanvasSpec{width, height, caption_height, photo_height}
    }
}

impl Default for CanvasSpec {
    /// The 1080x1296 canvas used by default.
    fn default() -> Self {
        CanvasSpec::of_width(DEFAULT_CANVAS_WIDTH)
    }
}


#[cfg(test)]
mod tests {
    use super::CanvasSpec;

    #[test]
    fn default_geometry() {
        let spec = CanvasSpec::default();
        assert_eq!(1080, spec.width);
        assert_eq!(1296, spec.height);
        assert_eq!(454, spec.caption_height);
        assert_eq!(842, spec.photo_height);
    }

    #[test]
    fn regions_partition_the_height() {
        for width in (4..4000).step_by(7) {
            let spec = CanvasSpec::of_width(width);
            assert_eq!(spec.height, spec.caption_height + spec.photo_height,
                "regions don't partition the canvas for width {}", width);
            assert!(spec.caption_height > 0, "empty caption region for width {}", width);
            assert!(spec.photo_height > 0, "empty photo region for width {}", width);
        }
    }

    #[test]
    #[should_panic(expected = "canvas width too small")]
    fn degenerate_width_panics() {
        CanvasSpec::of_width(3);
    }
}
