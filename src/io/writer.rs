//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Compression and object renumbering before save
//! - Output directory creation
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(&mut doc, Path::new("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SplitError};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress the PDF before writing.
    pub compress: bool,

    /// Renumber objects for a tidy cross-reference table.
    pub optimize: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            optimize: true,
            buffer_size: 8192,
        }
    }
}

/// PDF writer with configurable behavior.
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes (faster but less safe).
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Create the output directory (and parents) if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dir(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).map_err(|e| SplitError::FailedToCreateOutput {
            path: dir.to_path_buf(),
            source: e,
        })
    }

    /// Save a PDF document to a file.
    ///
    /// The document is mutated in place by compression and renumbering
    /// before serialization.
    ///
    /// # Arguments
    ///
    /// * `doc` - PDF document to save
    /// * `path` - Output file path
    ///
    /// # Returns
    ///
    /// The size of the written file in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<u64> {
        if self.options.compress {
            doc.compress();
        }

        if self.options.optimize {
            doc.renumber_objects();
        }

        let write_path = if self.options.atomic {
            path.with_extension("tmp")
        } else {
            path.to_path_buf()
        };

        let file =
            std::fs::File::create(&write_path).map_err(|e| SplitError::FailedToCreateOutput {
                path: write_path.clone(),
                source: e,
            })?;

        let mut writer = std::io::BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| SplitError::FailedToWrite {
                path: write_path.clone(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| SplitError::FailedToWrite {
            path: write_path.clone(),
            source: e,
        })?;

        if self.options.atomic {
            std::fs::rename(&write_path, path).map_err(|e| SplitError::FailedToWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        Ok(std::fs::metadata(path).map(|m| m.len()).unwrap_or(0))
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a file size as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
