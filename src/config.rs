//! Configuration module for pdfsplit.
//!
//! This module transforms CLI arguments into a validated, normalized
//! configuration that drives a split operation. It handles:
//! - Validation of argument combinations
//! - Application of defaults (output directory)
//! - Mode selection (range mode vs. count mode)

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use crate::range::PageInterval;

/// How the document is partitioned into output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitMode {
    /// One output file per parsed page interval, in input order.
    Ranges(Vec<PageInterval>),
    /// Fixed-size chunks of the given page count.
    Count(u32),
}

/// Complete configuration for a split operation.
///
/// All entities are created fresh per command invocation and discarded
/// after; nothing persists across runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF file path.
    pub input: PathBuf,

    /// Directory where output files are written (created if absent).
    pub output_dir: PathBuf,

    /// Partitioning mode.
    pub mode: SplitMode,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Verbose output mode.
    pub verbose: bool,
}

impl Config {
    /// Default output directory for an input file: `split_output` next
    /// to the input.
    pub fn default_output_dir(input: &Path) -> PathBuf {
        input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("split_output")
    }

    /// Validate the configuration.
    ///
    /// Checks for logical inconsistencies and invalid values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - Count mode is configured with a zero chunk size
    /// - Range mode is configured with no intervals
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        match &self.mode {
            SplitMode::Count(0) => {
                bail!("Pages per file must be a positive integer");
            }
            SplitMode::Ranges(intervals) if intervals.is_empty() => {
                bail!("No page ranges specified");
            }
            _ => {}
        }

        Ok(())
    }

    /// Check if output should be displayed.
    pub fn should_print(&self) -> bool {
        !self.quiet
    }
}
