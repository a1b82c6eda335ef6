//! End-to-end tests of the batch pairing pipeline.

use std::io::{Cursor, Read};

use image::{Rgb, RgbImage};

use memebatch::{BatchError, Compositor, FontProvider, Pipeline, SourceImage, Style};


/// Encode a solid-color PNG to use as a source image.
fn png_image(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(rgb));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageOutputFormat::Png).unwrap();
    bytes.into_inner()
}

fn pipeline() -> Pipeline {
    Pipeline::new(Compositor::new(FontProvider::builtin_only()))
}

fn captions(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn entry_names(archive_bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes.to_vec())).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_owned())
        .collect()
}

fn entry_bytes(archive_bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes.to_vec())).unwrap();
    let mut bytes = Vec::new();
    archive.by_name(name).unwrap().read_to_end(&mut bytes).unwrap();
    bytes
}


#[test]
fn empty_inputs_fail_fast() {
    let pipeline = pipeline();
    let image = SourceImage::new("a.png", png_image(100, 100, [0, 0, 255]));
    let style = Style::default();

    assert!(matches!(
        pipeline.run(&[], &captions(&["hi"]), &style),
        Err(BatchError::NoImages)));
    assert!(matches!(
        pipeline.run(&[image], &[], &style),
        Err(BatchError::NoCaptions)));
}

#[test]
fn full_batch_of_valid_items() {
    let pipeline = pipeline();
    let images = vec![
        SourceImage::new("a.png", png_image(640, 480, [255, 0, 0])),
        SourceImage::new("b.png", png_image(480, 640, [0, 255, 0])),
    ];
    let output = pipeline
        .run(&images, &captions(&["first", "second"]), &Style::default())
        .unwrap();

    assert_eq!(2, output.summary.successes());
    assert_eq!(2, output.summary.attempted());
    assert_eq!(vec!["meme_1.jpg", "meme_2.jpg"], entry_names(&output.archive));
}

#[test]
fn corrupt_image_is_skipped_not_fatal() {
    let pipeline = pipeline();
    let images = vec![
        SourceImage::new("good1.png", png_image(300, 300, [1, 2, 3])),
        SourceImage::new("broken.png", b"this is not an image at all".to_vec()),
        SourceImage::new("good2.png", png_image(300, 300, [4, 5, 6])),
    ];
    let output = pipeline
        .run(&images, &captions(&["one", "two", "three"]), &Style::default())
        .unwrap();

    assert_eq!(2, output.summary.successes());
    assert_eq!(3, output.summary.attempted());
    // The failed item keeps its index & name, and carries a detail message.
    let failures: Vec<_> = output.summary.failures().collect();
    assert_eq!(1, failures.len());
    assert_eq!(1, failures[0].index);
    assert_eq!("broken.png", failures[0].source_name);
    assert!(failures[0].error_detail().unwrap().contains("decode"));
    // The archive holds exactly the successful subset, in input order.
    assert_eq!(vec!["meme_1.jpg", "meme_3.jpg"], entry_names(&output.archive));
}

#[test]
fn longer_side_is_truncated_but_counted() {
    let pipeline = pipeline();
    let images: Vec<_> = (0..5)
        .map(|i| SourceImage::new(format!("img{}.png", i), png_image(200, 200, [i as u8, 0, 0])))
        .collect();
    let output = pipeline
        .run(&images, &captions(&["a", "b", "c"]), &Style::default())
        .unwrap();

    assert_eq!(3, output.summary.attempted());
    assert_eq!(2, output.summary.dropped_images);
    assert_eq!(0, output.summary.dropped_captions);
    assert_eq!(vec!["meme_1.jpg", "meme_2.jpg", "meme_3.jpg"],
               entry_names(&output.archive));
    // Images 4-5 are not referenced anywhere in the outcomes.
    assert!(output.summary.outcomes().iter().all(|o| o.index < 3));
}

#[test]
fn captions_with_empty_and_unbreakable_text() {
    let pipeline = pipeline();
    let images: Vec<_> = (0..3)
        .map(|i| SourceImage::new(format!("img{}.png", i), png_image(640, 480, [9, 9, 9])))
        .collect();
    let texts = captions(&["Hello world", "", "A very looooooongwordthatdoesnotfit"]);
    let output = pipeline.run(&images, &texts, &Style::default()).unwrap();

    assert_eq!(3, output.summary.successes());
    assert_eq!(3, entry_names(&output.archive).len());

    // The empty-caption meme has a blank (background-white) caption region.
    let meme2 = image::load_from_memory(&entry_bytes(&output.archive, "meme_2.jpg"))
        .unwrap().to_rgb8();
    let spec = *pipeline.compositor().spec();
    assert_eq!((spec.width, spec.height), meme2.dimensions());
    for y in (0..spec.caption_height).step_by(50) {
        for x in (0..spec.width).step_by(50) {
            let pixel = meme2.get_pixel(x, y).0;
            // JPEG is lossy; allow a bit of slack around pure white.
            assert!(pixel.iter().all(|&c| c >= 250),
                "caption region not blank at ({}, {}): {:?}", x, y, pixel);
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let images = vec![
        SourceImage::new("a.png", png_image(800, 600, [120, 50, 200])),
    ];
    let texts = captions(&["Determinism or it didn't happen"]);
    let style = Style::default();

    let first = pipeline().run(&images, &texts, &style).unwrap();
    let second = pipeline().run(&images, &texts, &style).unwrap();
    assert_eq!(entry_bytes(&first.archive, "meme_1.jpg"),
               entry_bytes(&second.archive, "meme_1.jpg"));
}

#[test]
fn output_dimensions_are_exact_for_any_source_shape() {
    let pipeline = pipeline();
    let spec = *pipeline.compositor().spec();
    for (w, h) in [(2000, 100), (100, 2000), (500, 500)] {
        let images = vec![SourceImage::new("src.png", png_image(w, h, [60, 60, 60]))];
        let output = pipeline
            .run(&images, &captions(&["shape test"]), &Style::default())
            .unwrap();
        let meme = image::load_from_memory(&entry_bytes(&output.archive, "meme_1.jpg"))
            .unwrap().to_rgb8();
        assert_eq!((spec.width, spec.height), meme.dimensions(),
            "wrong canvas for a {}x{} source", w, h);
    }
}
