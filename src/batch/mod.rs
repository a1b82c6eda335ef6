//! Module implementing the batch pairing pipeline.
//!
//! The pipeline zips an ordered list of source images with an ordered list
//! of captions by index, composes one meme per pair, and stages every
//! successful result into a single ZIP archive. A failing item is recorded
//! and skipped; it never aborts the rest of the batch.

mod archive;
mod outcome;

pub use self::archive::ArchiveWriter;
pub use self::outcome::{BatchSummary, ItemOutcome, output_name};


use log::{debug, info, warn};
use thiserror::Error;

use crate::compose::{ComposeError, Compositor, MemeOutput};
use crate::model::Style;


/// A single source image: an identifier plus its (still encoded) bytes.
#[derive(Clone, Debug)]
pub struct SourceImage {
    /// Identifier of the image, e.g. its file name.
    pub name: String,
    /// Encoded image content (JPEG, PNG, ...).
    pub bytes: Vec<u8>,
}

impl SourceImage {
    #[inline]
    pub fn new<S: Into<String>>(name: S, bytes: Vec<u8>) -> Self {
        SourceImage{name: name.into(), bytes}
    }
}


/// Everything a finished batch run produces.
#[derive(Debug)]
pub struct BatchOutput {
    /// Per-item & aggregate outcomes.
    pub summary: BatchSummary,
    /// The finished ZIP archive with one JPEG entry per successful item.
    pub archive: Vec<u8>,
}


/// Error fatal to a whole batch run.
///
/// Note that a single bad image is *not* fatal; it merely shows up
/// as a failed item in the `BatchSummary`.
#[derive(Debug, Error)]
pub enum BatchError {
    /// No input images at all.
    #[error("no input images given")]
    NoImages,
    /// No captions at all.
    #[error("no captions given")]
    NoCaptions,
    /// The output archive could not be written.
    #[error("cannot write the output archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}


/// The batch pairing pipeline.
///
/// Items are processed strictly sequentially, in input index order,
/// sharing only the read-only `Style` and the compositor's font cache.
#[derive(Debug)]
pub struct Pipeline {
    compositor: Compositor,
}

impl Pipeline {
    #[inline]
    pub fn new(compositor: Compositor) -> Self {
        Pipeline{compositor}
    }

    /// The compositor this pipeline runs items through.
    #[inline]
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }
}

impl Pipeline {
    /// Run a whole batch: pair images with captions, compose every pair,
    /// and return the summary along with the finished archive.
    ///
    /// The pairing length is `min(images.len(), captions.len())`; the tail
    /// of the longer side is dropped (with a warning, and counted in the
    /// summary). An empty side fails the run before any item is processed.
    pub fn run(&self, images: &[SourceImage], captions: &[String],
               style: &Style) -> Result<BatchOutput, BatchError> {
        if images.is_empty() {
            return Err(BatchError::NoImages);
        }
        if captions.is_empty() {
            return Err(BatchError::NoCaptions);
        }

        let count = images.len().min(captions.len());
        let mut summary = BatchSummary::new(
            images.len() - count, captions.len() - count);
        if summary.dropped_images > 0 {
            warn!("{} trailing image(s) have no caption and will be skipped",
                summary.dropped_images);
        }
        if summary.dropped_captions > 0 {
            warn!("{} trailing caption(s) have no image and will be skipped",
                summary.dropped_captions);
        }
        debug!("Batch of {} pair(s), style: {:?}", count, style);

        let mut archive = ArchiveWriter::new();
        for (index, (image, caption)) in images.iter().zip(captions).take(count).enumerate() {
            let name = output_name(index);
            let result = match self.process_item(image, caption, style) {
                Ok(output) => {
                    archive.add(&name, output.bytes())?;
                    info!("[{}/{}] {} -> {}", index + 1, count, image.name, name);
                    Ok(())
                }
                Err(e) => {
                    warn!("[{}/{}] skipping `{}`: {}", index + 1, count, image.name, e);
                    Err(e)
                }
            };
            summary.record(ItemOutcome{
                index,
                source_name: image.name.clone(),
                output_name: name,
                result,
            });
        }

        info!("Batch done: {}/{} meme(s) generated", summary.successes(), count);
        let archive = archive.finish()?;
        Ok(BatchOutput{summary, archive})
    }

    /// Decode, compose and encode a single pair.
    fn process_item(&self, image: &SourceImage, caption: &str,
                    style: &Style) -> Result<MemeOutput, ComposeError> {
        let decoded = image::load_from_memory(&image.bytes)
            .map_err(ComposeError::Decode)?;
        self.compositor.render(&decoded, caption, style)
    }
}


/// Extract captions from the content of a captions text file.
///
/// Each non-blank line is one caption, in order; blank and whitespace-only
/// lines are dropped. Windows line endings are tolerated.
pub fn captions_from_text(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_owned())
        .collect()
}
