//! Logo transform: white background to transparent, everything else to white
//!
//! Built for dropping a black-on-white logo onto a dark page header. Each
//! pixel is classified on its own:
//!
//! ```text
//! R, G, B all > 200   ->  alpha 0 (color kept)
//! anything else       ->  (255, 255, 255, 255)
//! ```
//!
//! The source alpha channel is ignored; only brightness drives transparency.

use image::{ImageError, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Channel value a pixel must exceed on R, G and B to count as background
pub const WHITE_THRESHOLD: u8 = 200;

/// Errors from loading or saving a logo
#[derive(Debug, Error)]
pub enum LogoError {
    /// Input could not be opened or decoded
    #[error("Failed to read image '{path}': {source}")]
    Read { path: PathBuf, source: ImageError },

    /// Output could not be encoded or written
    #[error("Failed to write image '{path}': {source}")]
    Write { path: PathBuf, source: ImageError },
}

/// Whether a pixel belongs to the white background
pub fn is_background(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD
}

/// Map one pixel
pub fn transform_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = pixel.0;
    if is_background(&pixel) {
        Rgba([r, g, b, 0])
    } else {
        Rgba([255, 255, 255, 255])
    }
}

/// Apply [`transform_pixel`] to every pixel in place
pub fn transform_image(img: &mut RgbaImage) {
    for pixel in img.pixels_mut() {
        *pixel = transform_pixel(*pixel);
    }
}

/// Load `input`, transform it and save it to `output`
///
/// The output format follows the output file extension.
pub fn process_logo(input: &Path, output: &Path) -> Result<(), LogoError> {
    let mut img = image::open(input)
        .map_err(|source| LogoError::Read {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    tracing::debug!("Loaded {} ({}x{})", input.display(), width, height);

    transform_image(&mut img);

    img.save(output).map_err(|source| LogoError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!("Processed logo saved to {}", output.display());
    Ok(())
}
