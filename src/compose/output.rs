//! Defines the output of a single meme composition.

use std::ops::Deref;

use image::ImageFormat;


/// Encoded output of composing one meme.
#[derive(Clone, Debug)]
#[must_use = "unused composition output which must be used"]
pub struct MemeOutput {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl MemeOutput {
    #[inline]
    pub(super) fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        MemeOutput{format, bytes}
    }
}

impl MemeOutput {
    /// Image format of the output.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Raw bytes of the output.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the output into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for MemeOutput {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl From<MemeOutput> for Vec<u8> {
    fn from(output: MemeOutput) -> Vec<u8> {
        output.into_bytes()
    }
}
