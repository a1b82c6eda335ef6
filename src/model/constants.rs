//! Module defining constants relevant to the data model.

use super::types::Color;


/// Default width of the final canvas, in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1080;

/// Fraction of the canvas height reserved for the caption region.
pub const CAPTION_RATIO: f32 = 0.35;

/// Name of the default font.
pub const DEFAULT_FONT: &str = "sans-bold";

/// Default size of the caption text, in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 70.0;
/// Smallest caption text size accepted by `StyleBuilder`.
pub const MIN_FONT_SIZE: f32 = 30.0;
/// Largest caption text size accepted by `StyleBuilder`.
pub const MAX_FONT_SIZE: f32 = 100.0;

/// Default color of the canvas & caption background.
pub const DEFAULT_BACKGROUND: Color = Color(0xff, 0xff, 0xff);
/// Default color of the caption text.
pub const DEFAULT_TEXT_COLOR: Color = Color(0x0, 0x0, 0x0);

/// Quality of the generated JPEG images (in %).
pub const JPEG_QUALITY: u8 = 95;

/// Vertical gap between consecutive caption lines, in pixels.
pub const LINE_SPACING: f32 = 10.0;

/// Numerator of the characters-per-line estimate.
///
/// The wrapping budget for a caption is `WRAP_BUDGET / text size`,
/// tuned so that the default 70px text wraps at 22 characters.
pub const WRAP_BUDGET: f32 = 1540.0;
/// Lower bound on the characters-per-line estimate.
pub const MIN_CHARS_PER_LINE: usize = 8;

/// Multiplier used to approximate line height
/// when the font reports degenerate vertical metrics.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;
