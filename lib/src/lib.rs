//! chromaglyph - colored text art from raster images
//!
//! Resamples an image to a terminal-friendly grid, stretches contrast, and
//! maps every pixel to a density-ordered glyph plus a slightly boosted
//! display color. Also ships a small PDF page-chunk splitter.
//!
//! # Example
//! ```no_run
//! use chromaglyph::{RenderConfig, render_path};
//!
//! let grid = render_path("photo.jpg", &RenderConfig::with_width(80)).unwrap();
//! print!("{}", grid.to_plain_text());
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod pdf;
pub mod processor;

// Re-export main types for convenience
pub use ascii::{ArtGrid, Cell};
pub use config::{ContrastPivot, RenderConfig};
pub use error::{RenderError, SplitError};
pub use lut::PALETTE;
pub use pdf::{SplitReport, split_pdf};
pub use processor::{decode_bytes, open_image, render, render_path, target_dimensions};

/// Default plain-text export name for an image file name
///
/// Keeps the text before the first `.`: `photo.jpg` becomes `ascii_photo.txt`.
pub fn export_file_name(image_file_name: &str) -> String {
    let stem = image_file_name.split('.').next().unwrap_or_default();
    format!("ascii_{stem}.txt")
}
