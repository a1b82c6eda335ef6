//! Module with the definitions of the data model types.

mod canvas;
mod color;
mod style;

pub use self::canvas::CanvasSpec;
pub use self::color::{Color, ColorParseError};
pub use self::style::{Error as StyleError, Style, StyleBuilder};
