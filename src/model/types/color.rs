//! Module implementing the `Color` type.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use thiserror::Error;


/// RGB color, used for both the canvas background and the caption text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Create a white color.
    #[inline]
    pub fn white() -> Self {
        Self::gray(0xff)
    }

    /// Create a black color.
    #[inline]
    pub fn black() -> Self {
        Self::gray(0x0)
    }

    /// Create a gray color of given intensity.
    #[inline]
    pub fn gray(value: u8) -> Self {
        Color(value, value, value)
    }
}

impl Color {
    /// Convert the color to its chromatic inverse.
    #[inline]
    pub fn invert(self) -> Self {
        let Color(r, g, b) = self;
        Color(0xff - r, 0xff - g, 0xff - b)
    }

    #[inline]
    pub(crate) fn to_rgb(self) -> Rgb<u8> {
        let Color(r, g, b) = self;
        Rgb([r, g, b])
    }
}

impl From<Color> for Rgb<u8> {
    #[inline]
    fn from(color: Color) -> Rgb<u8> {
        color.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let &Color(r, g, b) = self;
        write!(fmt, "#{:0>2x}{:0>2x}{:0>2x}", r, g, b)
    }
}


/// The handful of color names accepted besides hex notation.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color(0x00, 0x00, 0x00)),
    ("white", Color(0xff, 0xff, 0xff)),
    ("red", Color(0xff, 0x00, 0x00)),
    ("lime", Color(0x00, 0xff, 0x00)),
    ("green", Color(0x00, 0x80, 0x00)),
    ("blue", Color(0x00, 0x00, 0xff)),
    ("yellow", Color(0xff, 0xff, 0x00)),
    ("cyan", Color(0x00, 0xff, 0xff)),
    ("magenta", Color(0xff, 0x00, 0xff)),
    ("gray", Color(0x80, 0x80, 0x80)),
    ("silver", Color(0xc0, 0xc0, 0xc0)),
    ("maroon", Color(0x80, 0x00, 0x00)),
    ("navy", Color(0x00, 0x00, 0x80)),
    ("teal", Color(0x00, 0x80, 0x80)),
    ("orange", Color(0xff, 0xa5, 0x00)),
];

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse a color from a string.
    ///
    /// Accepted notations are `#rrggbb`, `#rgb` (with `0x` and `$`
    /// also allowed as hex prefixes), and a few well-known color names.
    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let s = v.trim().to_lowercase();

        for &(name, color) in NAMED_COLORS {
            if s == name {
                return Ok(color);
            }
        }

        let mut hex = None;
        for prefix in ["#", "0x", "$"] {
            if let Some(rest) = s.strip_prefix(prefix) {
                // Only the standard CSS prefix allows the short form.
                if prefix != "#" && rest.len() != 6 {
                    return Err(ColorParseError::Syntax(v.to_owned()));
                }
                hex = Some(rest);
                break;
            }
        }
        // No prefix means it's ambiguous whether it's hex or a name.
        let hex = hex.ok_or_else(|| ColorParseError::Syntax(v.to_owned()))?;

        let channel = |c: &str| u8::from_str_radix(c, 16)
            .map_err(|_| ColorParseError::Syntax(v.to_owned()));
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let value = channel(&c.to_string())?;
                    channels[i] = value * 0x10 + value;
                }
                Ok(Color(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Color(channel(&hex[0..2])?,
                          channel(&hex[2..4])?,
                          channel(&hex[4..6])?)),
            _ => Err(ColorParseError::Syntax(v.to_owned())),
        }
    }
}

/// Error that may occur while parsing a `Color` from a string.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorParseError {
    /// The string is not a recognized color notation.
    #[error("invalid color syntax: `{0}`")]
    Syntax(String),
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use super::Color;

    #[test]
    fn named_colors() {
        assert_eq!(Ok(Color(0, 0, 0)), Color::from_str("black"));
        assert_eq!(Ok(Color(0xff, 0xff, 0xff)), Color::from_str("white"));
        assert_eq!(Ok(Color(0xff, 0, 0)), Color::from_str("red"));
        assert_eq!(Ok(Color(0, 0xff, 0)), Color::from_str("lime"));  // "green" is just half green
        assert!(Color::from_str("uwotm8").is_err());
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Ok(Color(0, 0xff, 0)), Color::from_str("#0f0"));
        assert_eq!(Ok(Color(0, 0xff, 0)), Color::from_str("#00ff00"));
        assert_eq!(Ok(Color(0xff, 0, 0)), Color::from_str("0xff0000"));
        assert_eq!(Ok(Color(0, 0, 0xff)), Color::from_str("$0000ff"));
        // Forbidden because it's unclear what they would mean.
        assert!(Color::from_str("0xf0f").is_err());
        assert!(Color::from_str("$ff0").is_err());
        // A prefix is required (otherwise it's ambiguous if it's hex or a name).
        assert!(Color::from_str("f0f0f0").is_err());
    }

    #[test]
    fn display_is_css_hex() {
        assert_eq!("#ff0000", format!("{}", Color(0xff, 0, 0)));
        assert_eq!("#01020f", format!("{}", Color(1, 2, 15)));
    }

    #[test]
    fn invert() {
        assert_eq!(Color::white(), Color::black().invert());
        assert_eq!(Color(0xff, 0xfe, 0x00), Color(0x00, 0x01, 0xff).invert());
    }
}
