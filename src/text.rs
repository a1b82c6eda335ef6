//! Module responsible for laying out & rendering caption text.

use std::cmp;

use image::{Rgb, RgbImage};
use log::trace;
use rusttype::{point, Scale};

use crate::model::Color;
use crate::model::constants::{LINE_HEIGHT_FACTOR, LINE_SPACING,
                              MIN_CHARS_PER_LINE, WRAP_BUDGET};
use crate::resources::Font;


/// Width of a missing glyph, as a fraction of the text size.
/// Used when measuring text the font has no glyphs for.
const MISSING_GLYPH_WIDTH_FACTOR: f32 = 0.5;


/// A single laid-out caption line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// The line's text.
    pub text: String,
    /// Measured pixel width of the text.
    pub width: f32,
    /// Y offset of the top of the line box, relative to the caption region.
    pub y: f32,
}

/// A caption broken into lines and positioned within the caption region.
///
/// Computed fresh for every caption and discarded after drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// The lines, in reading order.
    pub lines: Vec<Line>,
    /// Height of a single line box.
    pub line_height: f32,
    /// Total height of the block, including inter-line spacing.
    pub total_height: f32,
}

impl TextBlock {
    /// Whether the block contains no text at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}


/// Estimate how many characters fit in one caption line at given text size.
pub fn chars_per_line(size: f32) -> usize {
    cmp::max(MIN_CHARS_PER_LINE, (WRAP_BUDGET / size).floor() as usize)
}

/// Break text into lines of at most `max_chars` characters,
/// greedily and only at whitespace.
///
/// A single word longer than the budget is emitted alone on its own line,
/// unbroken. Interior whitespace is collapsed, like in the text of a meme.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars == 0 {
            // The first word of a line is never split, no matter its length.
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Height of a single line box for given font & text size.
///
/// Falls back on an approximation if the font metrics are degenerate.
pub fn line_height(font: &Font, size: f32) -> f32 {
    let metrics = font.v_metrics(Scale::uniform(size));
    let height = metrics.ascent - metrics.descent;
    if height > 0.0 { height } else { fallback_line_height(size) }
}

/// Approximate line box height used when font metrics are unavailable.
#[inline]
pub fn fallback_line_height(size: f32) -> f32 {
    size * LINE_HEIGHT_FACTOR
}

/// Measured pixel width of a single line of text.
fn measure_line(font: &Font, text: &str, size: f32) -> f32 {
    let mut caret = 0.0;
    for glyph in font.layout(text, Scale::uniform(size), point(0.0, 0.0)) {
        caret = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
    }
    if caret == 0.0 && !text.is_empty() {
        // The font covers none of the characters; approximate.
        return MISSING_GLYPH_WIDTH_FACTOR * size * text.chars().count() as f32;
    }
    caret
}


/// Lay out a caption within a caption region of given dimensions.
///
/// The block is centered vertically within the region; each line is later
/// centered horizontally on its own. A block taller than the region simply
/// sticks out (and gets clipped when drawn) -- this is deliberate.
///
/// Layout is deterministic and never fails; an empty caption
/// yields a block with no lines and zero height.
pub fn layout(caption: &str, caption_height: u32, font: &Font, size: f32) -> TextBlock {
    let lines = wrap(caption, chars_per_line(size));
    trace!("Caption {:?} wrapped into {} line(s)", caption, lines.len());

    let line_height = line_height(font, size);
    let advance = line_height + LINE_SPACING;
    let total_height = lines.len() as f32 * advance;
    let y0 = (caption_height as f32 - total_height) / 2.0;

    let lines = lines.into_iter().enumerate()
        .map(|(i, text)| {
            let width = measure_line(font, &text, size);
            Line{y: y0 + i as f32 * advance, width, text}
        })
        .collect();
    TextBlock{lines, line_height, total_height}
}

/// Draw a laid-out text block onto an image, in given color.
///
/// Each line is horizontally centered within the image independently.
/// Pixels outside of the image are clipped.
pub fn draw_block(img: &mut RgbImage, block: &TextBlock,
                  font: &Font, size: f32, color: Color) {
    let scale = Scale::uniform(size);
    let ascent = font.v_metrics(scale).ascent;
    let (img_width, img_height) = img.dimensions();

    for line in &block.lines {
        let x = (img_width as f32 - line.width) / 2.0;
        let baseline = line.y + ascent;
        for glyph in font.layout(&line.text, scale, point(x, baseline)) {
            if let Some(bbox) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px = bbox.min.x + gx as i32;
                    let py = bbox.min.y + gy as i32;
                    if px >= 0 && py >= 0 && (px as u32) < img_width && (py as u32) < img_height {
                        blend(img.get_pixel_mut(px as u32, py as u32), color, coverage);
                    }
                });
            }
        }
    }
}

/// Blend a color into given pixel with the coverage value as alpha.
fn blend(pixel: &mut Rgb<u8>, color: Color, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0);
    let Color(r, g, b) = color;
    for (channel, fg) in pixel.0.iter_mut().zip([r, g, b]) {
        *channel = ((1.0 - alpha) * *channel as f32 + alpha * fg as f32).round() as u8;
    }
}
