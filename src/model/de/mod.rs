//! Deserializers for the model types.

mod color;
mod style;
