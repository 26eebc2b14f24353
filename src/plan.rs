//! Split plans.
//!
//! A split plan is the ordered mapping from output file names to the
//! resolved page intervals each file will contain. Plans are computed in
//! full before any page is copied, so an invalid range fails the whole
//! command before the first output file is created.

use std::path::Path;

use crate::error::{Result, SplitError};
use crate::range::{PageInterval, ResolvedInterval};

/// A single planned output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// File name of the output, derived from the input file name and the
    /// resolved interval: `{stem}_pages_{start}-{end}{suffix}`.
    pub file_name: String,

    /// Pages this output file will contain.
    pub interval: ResolvedInterval,
}

/// An ordered sequence of planned output files.
///
/// Insertion order matters: it determines file creation order. Entries
/// may overlap; each simply produces its own output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan {
    entries: Vec<PlanEntry>,
}

impl SplitPlan {
    /// Build a plan from parsed page intervals (range mode).
    ///
    /// Intervals are resolved against `total_pages` in input order.
    /// Resolution fails fast: the first invalid interval aborts the plan
    /// and no partial plan is returned.
    ///
    /// # Arguments
    ///
    /// * `intervals` - Parsed intervals, in the order the user gave them
    /// * `total_pages` - Page count of the source document
    /// * `input` - Path to the source document (for file-name derivation)
    ///
    /// # Errors
    ///
    /// Returns a range-bounds error for the first interval that is
    /// inverted, starts at page 0, or extends past the document.
    pub fn by_ranges(
        intervals: &[PageInterval],
        total_pages: u32,
        input: &Path,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(intervals.len());

        for interval in intervals {
            let resolved = interval.resolve(total_pages)?;
            entries.push(PlanEntry {
                file_name: output_file_name(input, resolved),
                interval: resolved,
            });
        }

        Ok(Self { entries })
    }

    /// Build a plan of fixed-size chunks (count mode).
    ///
    /// Produces `ceil(total_pages / pages_per_file)` chunks. Chunk `k`
    /// (0-indexed) covers pages `k * pages_per_file + 1` through
    /// `min((k + 1) * pages_per_file, total_pages)`. The final chunk may
    /// be shorter; that is expected, not an error.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `pages_per_file` is zero.
    pub fn by_count(total_pages: u32, pages_per_file: u32, input: &Path) -> Result<Self> {
        if pages_per_file == 0 {
            return Err(SplitError::invalid_argument(
                "Pages per file must be a positive integer",
            ));
        }

        let chunks = total_pages.div_ceil(pages_per_file);
        let mut entries = Vec::with_capacity(chunks as usize);

        for k in 0..chunks {
            let start = k * pages_per_file + 1;
            let end = ((k + 1) * pages_per_file).min(total_pages);
            let interval = ResolvedInterval { start, end };
            entries.push(PlanEntry {
                file_name: output_file_name(input, interval),
                interval,
            });
        }

        Ok(Self { entries })
    }

    /// The planned output files, in creation order.
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Number of output files this plan will produce.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of page copies this plan will perform.
    ///
    /// Overlapping intervals count each copy separately; this is the
    /// progress-bar total, not the source page count.
    pub fn total_page_copies(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| u64::from(e.interval.page_count()))
            .sum()
    }
}

/// Derive an output file name from the input path and a resolved interval.
///
/// `report.pdf` split at pages 3-5 becomes `report_pages_3-5.pdf`; an
/// input without an extension keeps none.
fn output_file_name(input: &Path, interval: ResolvedInterval) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let suffix = input
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{stem}_pages_{}-{}{suffix}", interval.start, interval.end)
}
