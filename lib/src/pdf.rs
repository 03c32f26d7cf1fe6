//! PDF splitting into fixed-size page chunks

use crate::error::SplitError;
use lopdf::Document;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// One written chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based chunk number
    pub index: usize,
    /// 1-based inclusive page range
    pub pages: RangeInclusive<u32>,
    pub path: PathBuf,
}

/// Outcome of a split
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub total_pages: u32,
    pub output_dir: PathBuf,
    pub chunks: Vec<Chunk>,
}

/// Plan consecutive 1-based page ranges of at most `pages_per_chunk` pages
pub fn plan_chunks(total_pages: u32, pages_per_chunk: usize) -> Vec<RangeInclusive<u32>> {
    if pages_per_chunk == 0 {
        return Vec::new();
    }
    let step = pages_per_chunk.min(u32::MAX as usize) as u32;
    (0..total_pages)
        .step_by(step as usize)
        .map(|start| {
            let end = start.saturating_add(step).min(total_pages);
            (start + 1)..=end
        })
        .collect()
}

/// Output directory for `input`: `<parent>/<stem>_split`
pub fn output_dir_for(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{}_split", file_stem(input)))
}

/// File name for a chunk: `<stem>_part001_pages1-10.pdf`
pub fn chunk_file_name(stem: &str, index: usize, pages: &RangeInclusive<u32>) -> String {
    format!(
        "{}_part{:03}_pages{}-{}.pdf",
        stem,
        index,
        pages.start(),
        pages.end()
    )
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extract `pages` from `source` into a standalone document
fn extract_pages(source: &Document, pages: &RangeInclusive<u32>, total: u32) -> Document {
    let mut chunk = source.clone();
    let drop: Vec<u32> = (1..=total).filter(|p| !pages.contains(p)).collect();
    if !drop.is_empty() {
        chunk.delete_pages(&drop);
    }
    chunk.prune_objects();
    chunk
}

/// Split `input` into files of `pages_per_chunk` pages each
///
/// Files are written to [`output_dir_for`], which is created if missing.
/// The last chunk holds the remaining pages.
pub fn split_pdf(input: impl AsRef<Path>, pages_per_chunk: usize) -> Result<SplitReport, SplitError> {
    let input = input.as_ref();
    if pages_per_chunk < 1 {
        return Err(SplitError::InvalidChunkSize(pages_per_chunk));
    }
    if !input.exists() {
        return Err(SplitError::NotFound(input.to_path_buf()));
    }

    let source = Document::load(input)?;
    let total_pages = source.get_pages().len() as u32;
    let plan = plan_chunks(total_pages, pages_per_chunk);
    log::debug!(
        "{}: {} pages in {} chunks of {}",
        input.display(),
        total_pages,
        plan.len(),
        pages_per_chunk
    );

    let output_dir = output_dir_for(input);
    fs::create_dir_all(&output_dir)?;

    let stem = file_stem(input);
    let mut chunks = Vec::with_capacity(plan.len());
    for (i, pages) in plan.into_iter().enumerate() {
        let index = i + 1;
        let path = output_dir.join(chunk_file_name(&stem, index, &pages));

        let mut chunk = extract_pages(&source, &pages, total_pages);
        chunk.save(&path)?;
        log::info!("wrote {} (pages {}-{})", path.display(), pages.start(), pages.end());

        chunks.push(Chunk { index, pages, path });
    }

    Ok(SplitReport {
        total_pages,
        output_dir,
        chunks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, Stream, dictionary};

    fn sample_document(pages: u32) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids: Vec<Object> = Vec::new();
        for n in 0..pages {
            let content = format!("% page {}\n", n + 1).into_bytes();
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_plan_chunks_with_remainder() {
        assert_eq!(plan_chunks(5, 2), vec![1..=2, 3..=4, 5..=5]);
    }

    #[test]
    fn test_plan_chunks_exact_and_oversized() {
        assert_eq!(plan_chunks(4, 2), vec![1..=2, 3..=4]);
        assert_eq!(plan_chunks(3, 10), vec![1..=3]);
        assert!(plan_chunks(0, 3).is_empty());
        assert!(plan_chunks(3, 0).is_empty());
    }

    #[test]
    fn test_chunk_file_name() {
        assert_eq!(chunk_file_name("paper", 1, &(1..=10)), "paper_part001_pages1-10.pdf");
        assert_eq!(chunk_file_name("paper", 12, &(111..=115)), "paper_part012_pages111-115.pdf");
    }

    #[test]
    fn test_output_dir_for() {
        assert_eq!(
            output_dir_for(Path::new("/tmp/docs/paper.pdf")),
            PathBuf::from("/tmp/docs/paper_split")
        );
    }

    #[test]
    fn test_split_rejects_zero_chunk() {
        let result = split_pdf("whatever.pdf", 0);
        assert!(matches!(result, Err(SplitError::InvalidChunkSize(0))));
    }

    #[test]
    fn test_split_missing_file() {
        let result = split_pdf("/nonexistent/paper.pdf", 2);
        assert!(matches!(result, Err(SplitError::NotFound(_))));
    }

    #[test]
    fn test_split_pdf_writes_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.pdf");
        sample_document(5).save(&input).unwrap();

        let report = split_pdf(&input, 2).unwrap();
        assert_eq!(report.total_pages, 5);
        assert_eq!(report.output_dir, dir.path().join("paper_split"));

        let names: Vec<_> = report
            .chunks
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "paper_part001_pages1-2.pdf",
                "paper_part002_pages3-4.pdf",
                "paper_part003_pages5-5.pdf",
            ]
        );

        let counts: Vec<_> = report
            .chunks
            .iter()
            .map(|c| Document::load(&c.path).unwrap().get_pages().len())
            .collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }
}
