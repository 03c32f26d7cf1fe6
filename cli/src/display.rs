//! Terminal presentation of an [`ArtGrid`]

use chromaglyph::ArtGrid;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};
use std::io::{self, Write};

const PAD_X: usize = 2;
const PAD_Y: usize = 1;
const BORDER: Color = Color::Blue;
const FALLBACK_COLUMNS: u16 = 80;

/// Terminal width in columns, or 80 when it cannot be queried
pub fn terminal_columns() -> u16 {
    terminal::size().map(|(cols, _)| cols).unwrap_or(FALLBACK_COLUMNS)
}

/// Print a colored status line
pub fn status<W: Write>(out: &mut W, color: Color, message: &str) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(color),
        Print(message),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

/// Draw `grid` inside a rounded, titled panel centered on `columns`
///
/// Each cell is printed in its own 24-bit color; the color is reset at the
/// end of every row so a narrow terminal wrapping the panel stays readable.
pub fn write_panel<W: Write>(
    out: &mut W,
    grid: &ArtGrid,
    title: &str,
    columns: u16,
) -> io::Result<()> {
    let inner = grid.width() as usize + PAD_X * 2;
    let margin = " ".repeat((columns as usize).saturating_sub(inner + 2) / 2);

    // top border with the title centered in it
    let title: String = title.chars().take(inner.saturating_sub(2)).collect();
    let label = format!(" {title} ");
    let label_len = label.chars().count().min(inner);
    let left = (inner - label_len) / 2;
    let right = inner - label_len - left;
    queue!(
        out,
        Print(&margin),
        SetForegroundColor(BORDER),
        Print(format!("╭{}", "─".repeat(left))),
        SetForegroundColor(Color::Magenta),
        SetAttribute(Attribute::Bold),
        Print(&label),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(BORDER),
        Print(format!("{}╮", "─".repeat(right))),
        ResetColor,
        Print("\n")
    )?;

    for _ in 0..PAD_Y {
        blank_row(out, &margin, inner)?;
    }

    let pad = " ".repeat(PAD_X);
    for row in grid.rows() {
        queue!(
            out,
            Print(&margin),
            SetForegroundColor(BORDER),
            Print("│"),
            ResetColor,
            Print(&pad)
        )?;
        for cell in row {
            let [r, g, b] = cell.color.0;
            queue!(out, SetForegroundColor(Color::Rgb { r, g, b }), Print(cell.ch))?;
        }
        queue!(
            out,
            ResetColor,
            Print(&pad),
            SetForegroundColor(BORDER),
            Print("│"),
            ResetColor,
            Print("\n")
        )?;
    }

    for _ in 0..PAD_Y {
        blank_row(out, &margin, inner)?;
    }

    queue!(
        out,
        Print(&margin),
        SetForegroundColor(BORDER),
        Print(format!("╰{}╯", "─".repeat(inner))),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

fn blank_row<W: Write>(out: &mut W, margin: &str, inner: usize) -> io::Result<()> {
    queue!(
        out,
        Print(margin),
        SetForegroundColor(BORDER),
        Print(format!("│{}│", " ".repeat(inner))),
        ResetColor,
        Print("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaglyph::{RenderConfig, render};
    use image::{Rgb, RgbImage};

    fn sample_grid() -> ArtGrid {
        let img = RgbImage::from_fn(8, 8, |x, _| {
            let v = (x * 32) as u8;
            Rgb([v, 255 - v, 128])
        });
        render(&img, &RenderConfig::with_width(30)).unwrap()
    }

    #[test]
    fn test_panel_line_count() {
        let grid = sample_grid();
        let mut out = Vec::new();
        write_panel(&mut out, &grid, "ASCII Art: demo.png", 80).unwrap();

        let text = String::from_utf8(out).unwrap();
        // border + padding above and below the rows
        assert_eq!(text.lines().count(), grid.height() as usize + 2 + PAD_Y * 2);
        assert!(text.contains("ASCII Art: demo.png"));
        assert!(text.contains('╭') && text.contains('╯'));
    }

    #[test]
    fn test_panel_uses_cell_colors() {
        let grid = sample_grid();
        let mut out = Vec::new();
        write_panel(&mut out, &grid, "t", 80).unwrap();

        let text = String::from_utf8(out).unwrap();
        let [r, g, b] = grid.cells()[0].color.0;
        assert!(text.contains(&format!("38;2;{r};{g};{b}m")));
    }

    #[test]
    fn test_panel_narrow_terminal_has_no_margin() {
        let grid = sample_grid();
        let mut out = Vec::new();
        write_panel(&mut out, &grid, "a very long title that will not fit", 4).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().all(|line| !line.starts_with(' ')));
    }
}
