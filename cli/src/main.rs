mod display;
mod prompt;

use anyhow::Result;
use chromaglyph::{ContrastPivot, RenderConfig, export_file_name, open_image, render};
use clap::{Parser, ValueEnum};
use crossterm::style::Color;
use image::imageops::FilterType;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Render an image as colored text art in the terminal
#[derive(Parser, Debug)]
#[command(name = "img2text", version, about)]
struct Args {
    /// Image file to convert
    image: PathBuf,

    /// Output width in characters
    #[arg(short, long, default_value_t = 120)]
    width: u32,

    /// Contrast gain applied before glyph selection
    #[arg(long, default_value_t = 1.2)]
    contrast: f32,

    /// Value the contrast stretch pivots around
    #[arg(long, value_enum, default_value_t = Pivot::Midpoint)]
    pivot: Pivot,

    /// Gamma exponent for normalized brightness
    #[arg(long, default_value_t = 0.8)]
    gamma: f32,

    /// Display color multiplier
    #[arg(long, default_value_t = 1.1)]
    color_boost: f32,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = Filter::CatmullRom)]
    filter: Filter,

    /// Save the plain-text rendering here without asking
    #[arg(long, value_name = "PATH", conflicts_with = "no_prompt")]
    save: Option<PathBuf>,

    /// Do not offer to save the rendering
    #[arg(long)]
    no_prompt: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Pivot {
    Midpoint,
    Mean,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Pivot> for ContrastPivot {
    fn from(pivot: Pivot) -> Self {
        match pivot {
            Pivot::Midpoint => ContrastPivot::Midpoint,
            Pivot::Mean => ContrastPivot::Mean,
        }
    }
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            contrast: self.contrast,
            contrast_pivot: self.pivot.into(),
            gamma: self.gamma,
            color_boost: self.color_boost,
            filter: self.filter.into(),
            ..Default::default()
        }
    }
}

fn main() -> Result<ExitCode> {
    // Configure logging
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout();

    stdout.write_all(b"\n")?;
    display::status(&mut stdout, Color::Cyan, "Converting image to ASCII art...")?;

    let config = args.render_config();
    let rendered = open_image(&args.image).and_then(|img| {
        let size = img.dimensions();
        render(&img, &config).map(|grid| (grid, size))
    });
    let (grid, (src_width, src_height)) = match rendered {
        Ok(result) => result,
        Err(e) => {
            log::debug!("render failed: {e:?}");
            display::status(&mut stdout, Color::Red, &format!("Error: {e}"))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let file_name = args
        .image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    display::write_panel(
        &mut stdout,
        &grid,
        &format!("ASCII Art: {file_name}"),
        display::terminal_columns(),
    )?;
    stdout.write_all(b"\n")?;
    display::status(&mut stdout, Color::Green, "Conversion complete!")?;
    display::status(
        &mut stdout,
        Color::DarkGrey,
        &format!("Original size: ({src_width}, {src_height})"),
    )?;

    let target = match (&args.save, args.no_prompt) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => None,
        (None, false) => {
            let stdin = io::stdin();
            prompt::confirm(&mut stdin.lock(), &mut stdout, "Save ASCII art to a file? (y/n): ")?
                .then(|| PathBuf::from(export_file_name(&file_name)))
        }
    };

    if let Some(path) = target {
        save(&grid, &path, &mut stdout)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn save(grid: &chromaglyph::ArtGrid, path: &Path, stdout: &mut io::Stdout) -> Result<()> {
    match grid.write_plain_text(path) {
        Ok(()) => display::status(
            stdout,
            Color::Green,
            &format!("Saved to {}", path.display()),
        )?,
        Err(e) => {
            let e = anyhow::Error::new(e)
                .context(format!("failed to write {}", path.display()));
            display::status(stdout, Color::Red, &format!("Error while saving: {e:#}"))?;
        }
    }
    Ok(())
}
