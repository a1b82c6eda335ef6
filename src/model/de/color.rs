//! Deserializer for the Color type.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::de::{self, Deserialize, Visitor};

use crate::model::types::Color;


const FIELDS: &[&str] = &["r", "g", "b"];
const EXPECTING_MSG: &str = "color string or array/map of RGB values";


impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;
impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Color::from_str(v).map_err(|e| {
            warn!("Failed to parse color `{}`: {}", v, e);
            E::custom(e)
        })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        // Preemptively check for length.
        if let Some(size) = seq.size_hint() {
            if size != FIELDS.len() {
                return Err(de::Error::invalid_length(
                    size, &(&format!("{}", FIELDS.len()) as &str)));
            }
        }

        let mut channels = Vec::with_capacity(FIELDS.len());
        while let Some(elem) = seq.next_element::<u8>()? {
            channels.push(elem);

            // Immediately signal any length errors.
            if channels.len() > FIELDS.len() {
                return Err(de::Error::invalid_length(
                    channels.len(), &(&format!("{}", FIELDS.len()) as &str)));
            }
        }
        if channels.len() < FIELDS.len() {
            return Err(de::Error::invalid_length(
                channels.len(), &(&format!("{}", FIELDS.len()) as &str)));
        }
        Ok(Color(channels[0], channels[1], channels[2]))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where A: de::MapAccess<'de>
    {
        let (mut r, mut g, mut b) = (None, None, None);
        while let Some(key) = map.next_key::<String>()? {
            let key = key.trim().to_lowercase();
            let slot = match key.as_str() {
                "r" | "red" => &mut r,
                "g" | "green" => &mut g,
                "b" | "blue" => &mut b,
                key => return Err(de::Error::unknown_field(key, FIELDS)),
            };
            if slot.is_some() {
                return Err(de::Error::custom(
                    format!("duplicate color channel `{}`", key)));
            }
            *slot = Some(map.next_value()?);
        }

        let r = r.ok_or_else(|| de::Error::missing_field("r"))?;
        let g = g.ok_or_else(|| de::Error::missing_field("g"))?;
        let b = b.ok_or_else(|| de::Error::missing_field("b"))?;
        Ok(Color(r, g, b))
    }
}
