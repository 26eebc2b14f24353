//! CLI argument parsing for pdfsplit.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, SplitMode};
use crate::error::Result;
use crate::range::parse_ranges;

/// Split a PDF file into multiple documents.
///
/// pdfsplit extracts page ranges from a PDF into separate files, or
/// divides it into fixed-size chunks. It can also report information
/// about a document without modifying it.
#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(version)]
#[command(about = "Split a PDF file into multiple documents", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a PDF by page ranges
    ///
    /// Each range produces one output file. Without --ranges the whole
    /// document is copied into a single output file.
    ///
    /// Examples:
    ///   pdfsplit split-by-range report.pdf --ranges "1-5,8,11-end"
    ///   pdfsplit split-by-range report.pdf -r 1-3 -o parts/
    SplitByRange {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Directory for output files
        ///
        /// Defaults to a `split_output` directory next to the input file.
        /// Created if it does not exist.
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Page ranges to extract (e.g., "1-5,8,11-end")
        ///
        /// Comma-separated list of single pages and ranges. Page numbers
        /// are 1-indexed and inclusive. "end" refers to the last page.
        /// If omitted, the entire document is extracted as one file.
        #[arg(short = 'r', long, value_name = "RANGES")]
        ranges: Option<String>,

        /// Suppress all non-error output
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,

        /// Show detailed progress information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Split a PDF into fixed-size chunks
    ///
    /// Divides the document into consecutive chunks of N pages each.
    /// The final chunk may be shorter.
    ///
    /// Example:
    ///   pdfsplit split-by-count report.pdf --pages-per-file 10
    SplitByCount {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of pages per output file
        #[arg(short = 'n', long, value_name = "N")]
        pages_per_file: u32,

        /// Directory for output files
        ///
        /// Defaults to a `split_output` directory next to the input file.
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Suppress all non-error output
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,

        /// Show detailed progress information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a PDF file
    ///
    /// Reports page count, encryption status, file size, and document
    /// metadata without modifying the file.
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Convert a split subcommand into a validated [`Config`].
    ///
    /// Returns `None` for subcommands that do not perform a split.
    ///
    /// # Errors
    ///
    /// Returns an error if the range expression is malformed or the
    /// resulting configuration is invalid.
    pub fn to_config(&self) -> Result<Option<Config>> {
        let config = match self {
            Command::SplitByRange {
                input,
                output_dir,
                ranges,
                quiet,
                verbose,
            } => {
                let intervals = parse_ranges(ranges.as_deref().unwrap_or(""))?;
                Config {
                    input: input.clone(),
                    output_dir: output_dir
                        .clone()
                        .unwrap_or_else(|| Config::default_output_dir(input)),
                    mode: SplitMode::Ranges(intervals),
                    quiet: *quiet,
                    verbose: *verbose,
                }
            }
            Command::SplitByCount {
                input,
                pages_per_file,
                output_dir,
                quiet,
                verbose,
            } => Config {
                input: input.clone(),
                output_dir: output_dir
                    .clone()
                    .unwrap_or_else(|| Config::default_output_dir(input)),
                mode: SplitMode::Count(*pages_per_file),
                quiet: *quiet,
                verbose: *verbose,
            },
            Command::Info { .. } => return Ok(None),
        };

        config.validate()?;
        Ok(Some(config))
    }
}
