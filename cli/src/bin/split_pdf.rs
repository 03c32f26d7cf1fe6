//! Split a PDF into files of N pages each

use anyhow::{Context, Result};
use chromaglyph::split_pdf;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "split-pdf",
    version,
    about = "Split a PDF into chunks of N pages each",
    after_help = "Example: split-pdf paper.pdf 10"
)]
struct Args {
    /// PDF file to split
    pdf_file: PathBuf,

    /// Number of pages per output file
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pages_per_chunk: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let pages_per_chunk = usize::try_from(args.pages_per_chunk)
        .context("pages per chunk does not fit in memory on this platform")?;

    println!("Splitting {} into chunks of {pages_per_chunk} pages...", args.pdf_file.display());

    let report = split_pdf(&args.pdf_file, pages_per_chunk)
        .with_context(|| format!("failed to split {}", args.pdf_file.display()))?;

    println!("Total pages: {}", report.total_pages);
    for chunk in &report.chunks {
        let name = chunk
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!(
            "Created: {} (pages {}-{})",
            name,
            chunk.pages.start(),
            chunk.pages.end()
        );
    }

    println!(
        "\nDone! Split into {} files in: {}",
        report.chunks.len(),
        report.output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["split-pdf", "paper.pdf", "10"]);
        assert_eq!(args.pdf_file, PathBuf::from("paper.pdf"));
        assert_eq!(args.pages_per_chunk, 10);
    }

    #[test]
    fn test_args_reject_zero_and_missing() {
        assert!(Args::try_parse_from(["split-pdf", "paper.pdf", "0"]).is_err());
        assert!(Args::try_parse_from(["split-pdf", "paper.pdf"]).is_err());
        assert!(Args::try_parse_from(["split-pdf", "paper.pdf", "-3"]).is_err());
    }
}
