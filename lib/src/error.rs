//! Error types for rendering and PDF splitting

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning an image into an [`ArtGrid`](crate::ArtGrid)
#[derive(Error, Debug)]
pub enum RenderError {
    /// The input bytes could not be decoded as an image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Reading the image file or writing a plain-text export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Target width must be at least one column
    #[error("target width must be greater than 0, got {0}")]
    InvalidWidth(u32),

    /// Source image has no pixels to sample from
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A render setting is outside its accepted range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors produced while splitting a PDF into page chunks
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("pages per chunk must be positive, got {0}")]
    InvalidChunkSize(usize),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
