use crate::error::Result;
use crate::filters::{boost_color, gamma_correct, luminance};
use crate::lut::{PALETTE, palette_index};
use image::{Rgb, RgbImage};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// One rendered character with its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Palette character
    pub ch: char,
    /// Boosted foreground color
    pub color: Rgb<u8>,
    /// Position of `ch` in [`PALETTE`]
    pub level: usize,
}

/// Row-major grid of rendered cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl ArtGrid {
    /// Build a grid from row-major cells
    ///
    /// # Panics
    /// If `cells.len() != width * height`
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cell count must match grid dimensions"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on 0, and a zero-width grid has no rows anyway
        let row_len = (self.width as usize).max(1);
        self.cells.chunks_exact(row_len)
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Render the grid without color, one `\n`-terminated line per row
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 3 + self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|cell| cell.ch));
            out.push('\n');
        }
        out
    }

    /// Write the plain-text rendering to `path` as UTF-8
    pub fn write_plain_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_plain_text())?;
        log::info!("wrote {}x{} text art to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Select the cell for a single contrast-adjusted pixel
///
/// # Arguments
/// * `pixel` - Pixel after resampling and contrast boost
/// * `gamma` - Gamma exponent applied to normalized luma
/// * `color_boost` - Display color multiplier
pub fn select_cell(pixel: Rgb<u8>, gamma: f32, color_boost: f32) -> Cell {
    let level = palette_index(gamma_correct(luminance(pixel), gamma));
    Cell {
        ch: PALETTE[level],
        color: boost_color(pixel, color_boost),
        level,
    }
}

/// Select cells for every pixel of a prepared image
///
/// Rows are mapped in parallel and collected in order, so the result is
/// row-major regardless of scheduling.
///
/// # Returns
/// Grid with the same dimensions as `img`
pub fn select_cells(img: &RgbImage, gamma: f32, color_boost: f32) -> ArtGrid {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return ArtGrid::from_cells(width, height, Vec::new());
    }

    let row_len = width as usize * 3;
    let cells: Vec<Cell> = img
        .as_raw()
        .par_chunks_exact(row_len)
        .flat_map_iter(|row| {
            row.chunks_exact(3)
                .map(move |px| select_cell(Rgb([px[0], px[1], px[2]]), gamma, color_boost))
        })
        .collect();

    ArtGrid::from_cells(width, height, cells)
}
