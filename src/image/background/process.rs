use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};
use thiserror::Error;

use crate::image::background::predicate::{count_near_black, make_near_black_transparent};

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: u8 = 50;

/// Failures of a single removal run.
#[derive(Debug, Error)]
pub enum RemoveError {
    /// Input is missing, cannot be opened, or fails while being read.
    #[error("cannot open input image `{}`", .0.display())]
    InputNotFound(PathBuf, #[source] io::Error),

    #[error("cannot decode `{}` as an image", .0.display())]
    UnsupportedFormat(PathBuf, #[source] ImageError),

    #[error("cannot write PNG to `{}`", .0.display())]
    Write(PathBuf, #[source] ImageError),
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalReport {
    pub width: u32,
    pub height: u32,
    /// Number of pixels rewritten to transparent.
    pub converted: usize,
}

/// Make near-black pixels of `input` transparent and write an RGBA PNG to `output`.
///
/// The parent directory of `output` must already exist.
pub fn remove_near_black_background(
    input: &Path,
    output: &Path,
    threshold: u8,
) -> Result<RemovalReport, RemoveError> {
    let img = decode_rgba(input)?;
    let (width, height) = img.dimensions();
    let converted = count_near_black(&img, threshold);

    let processed = make_near_black_transparent(&img, threshold);
    DynamicImage::ImageRgba8(processed)
        .save_with_format(output, ImageFormat::Png)
        .map_err(|e| RemoveError::Write(output.to_path_buf(), e))?;

    Ok(RemovalReport {
        width,
        height,
        converted,
    })
}

/// Decode any supported image and upconvert it to 8-bit RGBA.
///
/// The format is sniffed from content first, then from the extension.
/// Read failures on the opened file count as an unreadable input; a file
/// that ends early is treated as corrupt data.
fn decode_rgba(input: &Path) -> Result<RgbaImage, RemoveError> {
    let unreadable = |e: io::Error| RemoveError::InputNotFound(input.to_path_buf(), e);

    let reader = ImageReader::open(input)
        .map_err(unreadable)?
        .with_guessed_format()
        .map_err(unreadable)?;
    let img = reader.decode().map_err(|e| match e {
        ImageError::IoError(e) if e.kind() != io::ErrorKind::UnexpectedEof => unreadable(e),
        e => RemoveError::UnsupportedFormat(input.to_path_buf(), e),
    })?;

    Ok(img.to_rgba8())
}
