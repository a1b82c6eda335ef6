//! Module implementing the `Style` type and its builder.

use std::fmt;

use derive_builder::Builder;
use thiserror::Error;

use crate::model::constants::{DEFAULT_BACKGROUND, DEFAULT_FONT, DEFAULT_FONT_SIZE,
                              DEFAULT_TEXT_COLOR, MAX_FONT_SIZE, MIN_FONT_SIZE};
use super::color::Color;


/// Describes how every meme in a batch is to be drawn.
///
/// A `Style` is picked once per batch run and shared (read-only)
/// by all the compositions in it.
/// Use the provided `Style::default` or `StyleBuilder` to create it.
#[derive(Builder, Clone, PartialEq)]
#[builder(derive(Debug, PartialEq),
          pattern = "owned", build_fn(skip))]
pub struct Style {
    /// Color of the canvas & caption background. Defaults to white.
    pub background: Color,
    /// Color of the caption text. Defaults to black.
    pub color: Color,
    /// Name of the font to render captions with. Defaults to `"sans-bold"`.
    pub font: String,
    /// Size of the caption text, in pixels.
    ///
    /// Must lie within the `MIN_FONT_SIZE..=MAX_FONT_SIZE` range.
    /// Defaults to 70.
    pub size: f32,
}

impl Default for Style {
    fn default() -> Self {
        StyleBuilder::default().build().expect("Style::default")
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Style{{{font:?}@{size} {color} on {bg}}}",
            font = self.font,
            size = self.size,
            color = self.color,
            bg = self.background)
    }
}


impl StyleBuilder {
    /// Build the resulting `Style`.
    pub fn build(self) -> Result<Style, Error> {
        self.validate()?;
        Ok(Style{
            // Note that we can't use #[builder(default)] if we override the build()
            // method with #[builder(build_fn)], which is why we have to put the defaults here.
            background: self.background.unwrap_or(DEFAULT_BACKGROUND),
            color: self.color.unwrap_or(DEFAULT_TEXT_COLOR),
            font: self.font.unwrap_or_else(|| DEFAULT_FONT.into()),
            size: self.size.unwrap_or(DEFAULT_FONT_SIZE),
        })
    }

    #[doc(hidden)]
    fn validate(&self) -> Result<(), Error> {
        if let Some(size) = self.size {
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
                return Err(Error::SizeOutOfRange(size));
            }
        }
        if let Some(ref font) = self.font {
            if font.trim().is_empty() {
                return Err(Error::EmptyFontName);
            }
        }
        Ok(())
    }
}


/// Error while building a `Style`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// Text size outside of the supported bounds.
    #[error("text size {} outside of the supported range {}-{}",
            .0, MIN_FONT_SIZE, MAX_FONT_SIZE)]
    SizeOutOfRange(f32),
    /// Blank font name given.
    #[error("font name cannot be blank")]
    EmptyFontName,
}


#[cfg(test)]
mod tests {
    use crate::model::constants::{DEFAULT_FONT, DEFAULT_FONT_SIZE};
    use super::{Color, Error, Style, StyleBuilder};

    #[test]
    fn defaults() {
        let style = Style::default();
        assert_eq!(Color::white(), style.background);
        assert_eq!(Color::black(), style.color);
        assert_eq!(DEFAULT_FONT, style.font);
        assert_eq!(DEFAULT_FONT_SIZE, style.size);
    }

    #[test]
    fn size_bounds() {
        assert!(StyleBuilder::default().size(30.0).build().is_ok());
        assert!(StyleBuilder::default().size(100.0).build().is_ok());
        assert_eq!(Err(Error::SizeOutOfRange(29.5)),
                   StyleBuilder::default().size(29.5).build());
        assert_eq!(Err(Error::SizeOutOfRange(101.0)),
                   StyleBuilder::default().size(101.0).build());
    }

    #[test]
    fn blank_font_rejected() {
        assert_eq!(Err(Error::EmptyFontName),
                   StyleBuilder::default().font("  ".into()).build());
    }
}
