//! Error types for pdfsplit.
//!
//! This module defines all error types that can occur while splitting a
//! PDF. Errors are designed to be informative and actionable, providing
//! clear context about what went wrong and how to fix it.
//!
//! # Error Categories
//!
//! - **I/O Errors**: File not found, permission denied, etc.
//! - **PDF Errors**: Unreadable or encrypted input files
//! - **Range Errors**: Malformed or out-of-bounds page ranges
//! - **Argument Errors**: Invalid options such as a zero chunk size

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfsplit operations.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Main error type for pdfsplit operations.
///
/// All errors in pdfsplit use this type. Every handled error is reported
/// to the user as a formatted message and exits the process with code 1;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file could not be opened as a PDF (unreadable or corrupt).
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Input file is encrypted and an empty password did not open it.
    #[error(
        "PDF is encrypted and could not be opened with an empty password: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// A page range token does not match any recognized shape.
    #[error(
        "Invalid page range token: '{token}'\n  \
         Expected a page number, 'N-M', or 'N-end' (e.g. '1-5,7,9-end')"
    )]
    RangeSyntax {
        /// The offending token, as the user typed it.
        token: String,
    },

    /// A page range is outside the document or inverted.
    #[error(
        "Invalid page range {range} for a PDF with {total_pages} page(s)\n  \
         Page numbers must be between 1 and {total_pages}"
    )]
    RangeBounds {
        /// The offending range, rendered as the user wrote it.
        range: String,
        /// Total pages in the PDF.
        total_pages: u32,
    },

    /// An option value is invalid (e.g. a zero chunk size).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what is wrong with the argument.
        message: String,
    },

    /// Failed to create the output directory or file.
    #[error("Failed to create output: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for SplitError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for SplitError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl SplitError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a RangeSyntax error.
    pub fn range_syntax(token: impl Into<String>) -> Self {
        Self::RangeSyntax {
            token: token.into(),
        }
    }

    /// Create a RangeBounds error.
    pub fn range_bounds(range: impl Into<String>, total_pages: u32) -> Self {
        Self::RangeBounds {
            range: range.into(),
            total_pages,
        }
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
