//! Module implementing the "cover" fit of a photo into its region.

use image::{DynamicImage, RgbImage, imageops};
use image::imageops::FilterType;
use log::trace;

use super::error::ComposeError;


/// Scale an image to fully cover the target rectangle, then center-crop it
/// to exactly `target_width` x `target_height`.
///
/// This is a "cover" fit: the target is filled completely, the overflow is
/// cropped away, and the source aspect ratio is *not* preserved in the
/// output. The source is normalized to plain RGB first, whatever its
/// original color model.
pub fn fit_crop(image: &DynamicImage,
                target_width: u32, target_height: u32) -> Result<RgbImage, ComposeError> {
    assert!(target_width > 0 && target_height > 0,
        "fit_crop target must be non-empty");

    let rgb = image.to_rgb8();
    let (orig_width, orig_height) = rgb.dimensions();
    if orig_width == 0 || orig_height == 0 {
        return Err(ComposeError::EmptyImage);
    }

    let scale = f64::max(target_width as f64 / orig_width as f64,
                         target_height as f64 / orig_height as f64);
    let scaled_width = ((orig_width as f64 * scale).round() as u32).max(target_width);
    let scaled_height = ((orig_height as f64 * scale).round() as u32).max(target_height);
    trace!("Covering {}x{} with a source of {}x{} scaled {:.3}x to {}x{}",
        target_width, target_height, orig_width, orig_height,
        scale, scaled_width, scaled_height);

    let resized = imageops::resize(&rgb, scaled_width, scaled_height, FilterType::Lanczos3);
    let left = (scaled_width - target_width) / 2;
    let top = (scaled_height - target_height) / 2;
    Ok(imageops::crop_imm(&resized, left, top, target_width, target_height).to_image())
}


#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbImage, Rgb};

    use super::fit_crop;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 20, 30])))
    }

    #[test]
    fn square_source() {
        let result = fit_crop(&solid(500, 500), 300, 200).unwrap();
        assert_eq!((300, 200), result.dimensions());
    }

    #[test]
    fn wider_than_target() {
        let result = fit_crop(&solid(4000, 100), 300, 200).unwrap();
        assert_eq!((300, 200), result.dimensions());
    }

    #[test]
    fn taller_than_target() {
        let result = fit_crop(&solid(100, 4000), 300, 200).unwrap();
        assert_eq!((300, 200), result.dimensions());
    }

    #[test]
    fn upscales_a_tiny_source() {
        let result = fit_crop(&solid(10, 10), 300, 200).unwrap();
        assert_eq!((300, 200), result.dimensions());
    }

    #[test]
    fn normalizes_color_model() {
        let gray = DynamicImage::ImageLuma8(
            image::GrayImage::from_pixel(50, 50, image::Luma([128])));
        let result = fit_crop(&gray, 40, 40).unwrap();
        assert_eq!((40, 40), result.dimensions());
        assert_eq!([128, 128, 128], result.get_pixel(20, 20).0);
    }
}
