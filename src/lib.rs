//! pdfsplit - Split a PDF file into multiple documents.
//!
//! This library provides functionality for splitting a PDF by page
//! ranges or into fixed-size chunks. It supports:
//!
//! - Range expressions like `1-5,8,11-end`
//! - Fixed-size chunking with a short final chunk
//! - Document inspection (page count, encryption, metadata)
//! - Atomic output writes
//! - Comprehensive error handling
//!
//! # Examples
//!
//! ## Split by ranges
//!
//! ```no_run
//! use pdfsplit::io::{PdfReader, PdfWriter};
//! use pdfsplit::plan::SplitPlan;
//! use pdfsplit::range::parse_ranges;
//! use pdfsplit::split::Splitter;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let input = Path::new("report.pdf");
//! let source = PdfReader::new().load(input)?;
//!
//! let intervals = parse_ranges("1-5,8,11-end")?;
//! let plan = SplitPlan::by_ranges(&intervals, source.page_count, input)?;
//!
//! let outcome = Splitter::new().split(&source, &plan, Path::new("out"), || {})?;
//! println!("Created {} file(s)", outcome.files.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Split into fixed-size chunks
//!
//! ```no_run
//! use pdfsplit::io::PdfReader;
//! use pdfsplit::plan::SplitPlan;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let input = Path::new("report.pdf");
//! let source = PdfReader::new().load(input)?;
//! let plan = SplitPlan::by_count(source.page_count, 10, input)?;
//! println!("{} chunk(s) of up to 10 pages", plan.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod plan;
pub mod range;
pub mod split;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SplitError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
