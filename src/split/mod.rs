//! Plan execution: copying page subsets into output files.
//!
//! The splitter walks a [`SplitPlan`](crate::plan::SplitPlan) in order,
//! builds a sub-document for each entry, and writes it under the entry's
//! file name. A synchronous progress callback is invoked once per copied
//! page. If a later entry fails, files written for earlier entries stay
//! on disk; this is a one-shot batch tool and performs no cleanup.

use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::reader::LoadedPdf;
use crate::io::writer::PdfWriter;
use crate::plan::SplitPlan;
use crate::range::ResolvedInterval;

/// Result of executing a split plan.
#[derive(Debug)]
pub struct SplitOutcome {
    /// Paths of the created files, in creation order.
    pub files: Vec<PathBuf>,

    /// Total number of pages copied across all files.
    pub pages_copied: u64,
}

/// Executes split plans against a loaded document.
pub struct Splitter {
    writer: PdfWriter,
}

impl Splitter {
    /// Create a splitter with the default writer.
    pub fn new() -> Self {
        Self {
            writer: PdfWriter::new(),
        }
    }

    /// Execute a plan, writing one output file per entry.
    ///
    /// The output directory is created if absent. Entries are processed
    /// in plan order and `on_page` is called once for each copied page.
    ///
    /// # Arguments
    ///
    /// * `source` - The loaded input document
    /// * `plan` - The split plan to execute
    /// * `output_dir` - Directory to write output files into
    /// * `on_page` - Progress callback, one call per copied page
    ///
    /// # Errors
    ///
    /// Returns the first error from sub-document assembly or writing.
    /// Earlier outputs are left in place.
    pub fn split<F>(
        &self,
        source: &LoadedPdf,
        plan: &SplitPlan,
        output_dir: &Path,
        mut on_page: F,
    ) -> Result<SplitOutcome>
    where
        F: FnMut(),
    {
        self.writer.ensure_dir(output_dir)?;

        let mut files = Vec::with_capacity(plan.len());
        let mut pages_copied = 0u64;

        for entry in plan.entries() {
            let mut part = extract_interval(&source.document, entry.interval, &mut on_page)?;
            pages_copied += u64::from(entry.interval.page_count());

            let output_path = output_dir.join(&entry.file_name);
            self.writer.save(&mut part, &output_path)?;
            files.push(output_path);
        }

        Ok(SplitOutcome {
            files,
            pages_copied,
        })
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a new document containing exactly the pages of `interval`.
///
/// Clones the source and deletes the complement, then prunes objects the
/// kept pages no longer reference. The interval must already be resolved
/// and validated against this document's page count.
fn extract_interval<F>(
    doc: &Document,
    interval: ResolvedInterval,
    on_page: &mut F,
) -> Result<Document>
where
    F: FnMut(),
{
    let mut part = doc.clone();
    let total = doc.get_pages().len() as u32;

    let pages_to_delete: Vec<u32> = (1..=total)
        .filter(|p| *p < interval.start || *p > interval.end)
        .collect();

    if !pages_to_delete.is_empty() {
        part.delete_pages(&pages_to_delete);
    }
    part.prune_objects();

    for _ in interval.start..=interval.end {
        on_page();
    }

    Ok(part)
}
