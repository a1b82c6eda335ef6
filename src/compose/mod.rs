//! Module implementing the composition of a single meme.

mod error;
mod fitcrop;
mod output;

pub use self::error::ComposeError;
pub use self::fitcrop::fit_crop;
pub use self::output::MemeOutput;


use image::{DynamicImage, ImageFormat, RgbImage, imageops};
use image::codecs::jpeg::JpegEncoder;
use log::debug;

use crate::model::{CanvasSpec, Style};
use crate::model::constants::JPEG_QUALITY;
use crate::resources::FontProvider;
use crate::text;


/// The meme compositor.
///
/// Given a decoded photo, a caption and a style, it produces the final
/// fixed-size canvas: the caption block rendered in the top region,
/// the cover-cropped photo pasted below it.
///
/// Captions are always drawn at the style's fixed text size; the size is
/// never auto-derived from the caption region's height.
///
/// Composition is a pure function of its inputs -- the compositor itself
/// only carries the canvas geometry, the font cache and the JPEG quality,
/// none of which change between items.
#[derive(Debug)]
pub struct Compositor {
    spec: CanvasSpec,
    fonts: FontProvider,
    jpeg_quality: u8,
}

impl Compositor {
    /// Create a compositor with the default canvas geometry.
    #[inline]
    pub fn new(fonts: FontProvider) -> Self {
        Self::with_spec(CanvasSpec::default(), fonts)
    }

    /// Create a compositor drawing on canvases of given geometry.
    #[inline]
    pub fn with_spec(spec: CanvasSpec, fonts: FontProvider) -> Self {
        Compositor{spec, fonts, jpeg_quality: JPEG_QUALITY}
    }

    /// Canvas geometry used by this compositor.
    #[inline]
    pub fn spec(&self) -> &CanvasSpec {
        &self.spec
    }

    /// The font provider used by this compositor.
    #[inline]
    pub fn fonts(&self) -> &FontProvider {
        &self.fonts
    }
}

impl Compositor {
    /// Compose a single meme into a raw pixel buffer
    /// of exactly `spec.width` x `spec.height`.
    pub fn compose(&self, image: &DynamicImage,
                   caption: &str, style: &Style) -> Result<RgbImage, ComposeError> {
        let spec = self.spec;
        let mut canvas = RgbImage::from_pixel(
            spec.width, spec.height, style.background.to_rgb());

        let caption_box = self.render_caption(caption, style);
        imageops::replace(&mut canvas, &caption_box, 0, 0);

        let photo = fit_crop(image, spec.width, spec.photo_height)?;
        imageops::replace(&mut canvas, &photo, 0, spec.caption_height as i64);

        Ok(canvas)
    }

    /// Compose a single meme and encode it as JPEG.
    pub fn render(&self, image: &DynamicImage,
                  caption: &str, style: &Style) -> Result<MemeOutput, ComposeError> {
        let canvas = self.compose(image, caption, style)?;

        debug!("Encoding the composed canvas as JPEG with quality {}", self.jpeg_quality);
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, self.jpeg_quality)
            .encode(canvas.as_raw(), canvas.width(), canvas.height(),
                    image::ColorType::Rgb8)
            .map_err(ComposeError::Encode)?;
        Ok(MemeOutput::new(ImageFormat::Jpeg, bytes))
    }

    /// Render the caption region: a background-filled surface
    /// with the laid-out text drawn over it.
    fn render_caption(&self, caption: &str, style: &Style) -> RgbImage {
        let spec = self.spec;
        let mut surface = RgbImage::from_pixel(
            spec.width, spec.caption_height, style.background.to_rgb());

        let font = self.fonts.resolve(&style.font);
        let block = text::layout(caption, spec.caption_height, &font, style.size);
        if block.is_empty() {
            debug!("Empty caption, leaving the caption region blank");
            return surface;
        }
        text::draw_block(&mut surface, &block, &font, style.size, style.color);
        surface
    }
}
