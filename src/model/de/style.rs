//! Deserializer for the Style type.

use serde::Deserialize;
use serde::de;

use crate::model::types::{Color, Style, StyleBuilder};


/// Raw, unvalidated shape of a deserialized `Style`.
/// Missing fields fall back to the usual defaults.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleRepr {
    background: Option<Color>,
    color: Option<Color>,
    font: Option<String>,
    size: Option<f32>,
}

impl<'de> Deserialize<'de> for Style {
    /// Deserialize a `Style`, going through `StyleBuilder`
    /// so that the usual validation (e.g. text size bounds) applies.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        let repr = StyleRepr::deserialize(deserializer)?;

        let mut builder = StyleBuilder::default();
        if let Some(background) = repr.background {
            builder = builder.background(background);
        }
        if let Some(color) = repr.color {
            builder = builder.color(color);
        }
        if let Some(font) = repr.font {
            builder = builder.font(font);
        }
        if let Some(size) = repr.size {
            builder = builder.size(size);
        }
        builder.build().map_err(de::Error::custom)
    }
}
