use crate::ascii::{ArtGrid, select_cells};
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::filters::{contrast_boost, contrast_pivot};
use image::{RgbImage, imageops};
use std::path::Path;

/// Compute the grid size for a source image
///
/// `rows = round(height / width * columns * aspect_correction)`; with the
/// default 0.5 correction this keeps the source's visual aspect ratio on
/// terminal cells that are twice as tall as they are wide.
///
/// # Returns
/// `(columns, rows)`; rows may be 0 for very wide sources
pub fn target_dimensions(width: u32, height: u32, config: &RenderConfig) -> Result<(u32, u32)> {
    if config.width == 0 {
        return Err(RenderError::InvalidWidth(config.width));
    }
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }

    let aspect_ratio = height as f64 / width as f64;
    let rows = (aspect_ratio * config.width as f64 * config.aspect_correction as f64).round();
    let too_large = || {
        RenderError::InvalidConfig(format!(
            "{} columns for a {}x{} image needs {} rows, too many to allocate",
            config.width, width, height, rows
        ))
    };
    if rows > u32::MAX as f64 {
        return Err(too_large());
    }
    let rows = rows as u32;
    (config.width as usize)
        .checked_mul(rows as usize)
        .and_then(|cells| cells.checked_mul(3))
        .ok_or_else(too_large)?;
    Ok((config.width, rows))
}

/// Converts a decoded RGB image into colored text art
///
/// Pipeline:
/// 1. Compute the target grid size from the aspect ratio
/// 2. Resample to exactly that many pixels
/// 3. Stretch contrast around the configured pivot
/// 4. Map each pixel to a palette character (BT.601 luma, gamma) and a
///    boosted display color
///
/// # Arguments
/// * `input` - Source image, left untouched
/// * `config` - Render settings, validated before any resampling
///
/// # Returns
/// An [`ArtGrid`] of `config.width` columns
pub fn render(input: &RgbImage, config: &RenderConfig) -> Result<ArtGrid> {
    config.validate()?;

    let (src_width, src_height) = input.dimensions();
    let (columns, rows) = target_dimensions(src_width, src_height, config)?;
    log::debug!(
        "rendering {}x{} source to {}x{} cells",
        src_width,
        src_height,
        columns,
        rows
    );

    if rows == 0 {
        return Ok(ArtGrid::from_cells(columns, 0, Vec::new()));
    }

    let mut working = imageops::resize(input, columns, rows, config.filter);

    let pivot = contrast_pivot(&working, config.contrast_pivot);
    log::debug!("contrast pivot {} gain {}", pivot, config.contrast);
    contrast_boost(&mut working, pivot, config.contrast);

    Ok(select_cells(&working, config.gamma, config.color_boost))
}

/// Decode an in-memory image into RGB
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbImage> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Open and decode an image file into RGB
///
/// A missing or unreadable file is reported as [`RenderError::Io`]; content
/// that is not a supported image is [`RenderError::Decode`].
pub fn open_image(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    log::debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgb8())
}

/// Decode an image file and render it
pub fn render_path(path: impl AsRef<Path>, config: &RenderConfig) -> Result<ArtGrid> {
    config.validate()?;
    let input = open_image(path)?;
    render(&input, config)
}
