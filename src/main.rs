//! memebatch CLI: turn a pile of images and a captions file into memes.zip.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use memebatch::{Compositor, FontProvider, Pipeline, SourceImage, Style,
                StyleBuilder, captions_from_text};


/// Batch generator of 5:6 captioned meme images.
///
/// Pairs the given images (in argument order) with the lines of the
/// captions file (in file order) and writes one ZIP archive with a JPEG
/// meme per pair.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Image files to caption, in order.
    #[arg(required = true, value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Text file with one caption per line (blank lines are skipped).
    #[arg(short, long, value_name = "FILE")]
    captions: PathBuf,

    /// Where to write the resulting archive.
    #[arg(short, long, value_name = "FILE", default_value = "memes.zip")]
    output: PathBuf,

    /// Directory with .ttf fonts to resolve font names against.
    /// Without it, the built-in font is used for everything.
    #[arg(long, value_name = "DIR")]
    font_dir: Option<PathBuf>,

    /// JSON file with the style to use as a base for the flags below.
    #[arg(long, value_name = "FILE")]
    style: Option<PathBuf>,

    /// Name of the caption font.
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Caption text size in pixels (30-100).
    #[arg(long, value_name = "PX")]
    size: Option<f32>,

    /// Background color (hex like `#rrggbb`, or a basic color name).
    #[arg(long, value_name = "COLOR")]
    background: Option<String>,

    /// Caption text color.
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,
}


fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let style = build_style(&args)?;
    let captions = {
        let text = fs::read_to_string(&args.captions)
            .with_context(|| format!("cannot read captions file {}", args.captions.display()))?;
        captions_from_text(&text)
    };
    let images = args.images.iter()
        .map(|path| {
            let bytes = fs::read(path)
                .with_context(|| format!("cannot read image file {}", path.display()))?;
            let name = path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(SourceImage::new(name, bytes))
        })
        .collect::<Result<Vec<_>>>()?;

    let fonts = match args.font_dir {
        Some(ref dir) => FontProvider::new(dir),
        None => FontProvider::builtin_only(),
    };
    let pipeline = Pipeline::new(Compositor::new(fonts));

    let output = pipeline.run(&images, &captions, &style)
        .context("batch run failed")?;
    for failure in output.summary.failures() {
        eprintln!("FAILED {} ({}): {}",
            failure.output_name, failure.source_name,
            failure.error_detail().unwrap_or_default());
    }

    fs::write(&args.output, &output.archive)
        .with_context(|| format!("cannot write archive to {}", args.output.display()))?;
    info!("Archive written to {}", args.output.display());
    println!("{}/{} memes generated -> {}",
        output.summary.successes(), output.summary.attempted(),
        args.output.display());

    if output.summary.successes() == 0 {
        bail!("no memes could be generated");
    }
    Ok(())
}

/// Assemble the effective style from the optional JSON file and the flags,
/// with flags taking precedence.
fn build_style(args: &Args) -> Result<Style> {
    let base: Option<Style> = match args.style {
        Some(ref path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read style file {}", path.display()))?;
            Some(serde_json::from_str(&text)
                .with_context(|| format!("invalid style in {}", path.display()))?)
        }
        None => None,
    };

    let mut builder = StyleBuilder::default();
    if let Some(base) = base {
        builder = builder
            .background(base.background)
            .color(base.color)
            .font(base.font)
            .size(base.size);
    }
    if let Some(ref color) = args.background {
        builder = builder.background(
            color.parse().with_context(|| format!("invalid background color `{}`", color))?);
    }
    if let Some(ref color) = args.color {
        builder = builder.color(
            color.parse().with_context(|| format!("invalid text color `{}`", color))?);
    }
    if let Some(ref font) = args.font {
        builder = builder.font(font.clone());
    }
    if let Some(size) = args.size {
        builder = builder.size(size);
    }
    builder.build().context("invalid style")
}
