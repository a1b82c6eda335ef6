//! Composition error.

use thiserror::Error;


/// Error that may occur while composing a single meme.
///
/// These are per-item errors: the batch pipeline records them
/// and moves on to the next item.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The source image could not be decoded.
    #[error("cannot decode the source image: {0}")]
    Decode(#[source] image::ImageError),
    /// The source image decoded to zero pixels.
    #[error("source image has no pixels")]
    EmptyImage,
    /// The composed image could not be encoded into the output format.
    #[error("failed to encode the final image: {0}")]
    Encode(#[source] image::ImageError),
}
