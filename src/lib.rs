//!
//! memebatch -- memes in bulk
//!
//! Composes fixed 5:6 meme canvases (caption block on top, cover-cropped
//! photo below) from paired lists of images & captions, and packages the
//! results into a single ZIP archive.
//!

pub mod batch;
pub mod compose;
pub mod model;
pub mod resources;
pub mod text;
mod util;

pub use batch::{BatchError, BatchOutput, BatchSummary, ItemOutcome,
                Pipeline, SourceImage, captions_from_text};
pub use compose::{ComposeError, Compositor, MemeOutput};
pub use model::{CanvasSpec, Color, Style, StyleBuilder};
pub use resources::{Font, FontProvider};
pub use util::cache::ThreadSafeCache;
