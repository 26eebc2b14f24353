//! PDF reading and loading operations.
//!
//! This module opens the input document, performs pre-flight checks,
//! detects encryption, and extracts display metadata. An encrypted
//! document that lopdf can open (i.e. the empty password works) is
//! treated as decrypted for all purposes; one it cannot open is
//! rejected before any split work begins.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplit::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf"))?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::{Dictionary, Document, Object};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// A loaded PDF document with its fixed per-invocation facts.
///
/// Immutable for the duration of a command: the page count and
/// encryption flag are captured once at load time.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: u32,

    /// Whether the document carries an encryption dictionary.
    ///
    /// If this is true the document was still opened successfully, which
    /// means the empty password worked.
    pub is_encrypted: bool,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    /// Collect display metadata for the `info` command.
    pub fn info(&self) -> DocumentInfo {
        let path = std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());

        let filename = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        DocumentInfo {
            filename,
            path,
            pages: self.page_count,
            is_encrypted: self.is_encrypted,
            decrypted: self.is_encrypted,
            file_size: self.file_size,
            version: self.document.version.clone(),
            metadata: read_info_dictionary(&self.document),
        }
    }
}

/// Document facts reported by the `info` command, for display only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// File name of the document.
    pub filename: String,

    /// Absolute path to the document.
    pub path: PathBuf,

    /// Number of pages.
    pub pages: u32,

    /// Whether the document is encrypted.
    pub is_encrypted: bool,

    /// Whether empty-password decryption succeeded. Always true when the
    /// document loaded at all; an undecryptable document is rejected
    /// with an encryption error instead.
    pub decrypted: bool,

    /// File size in bytes.
    pub file_size: u64,

    /// PDF version string (e.g. "1.7").
    pub version: String,

    /// Embedded info-dictionary metadata.
    pub metadata: DocumentMetadata,
}

/// Strings from the document's info dictionary.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Document title.
    pub title: Option<String>,
    /// Document author.
    pub author: Option<String>,
    /// Document subject.
    pub subject: Option<String>,
    /// Document keywords.
    pub keywords: Option<String>,
    /// Creating application.
    pub creator: Option<String>,
    /// Producing application.
    pub producer: Option<String>,
    /// Creation date, as stored.
    pub creation_date: Option<String>,
    /// Modification date, as stored.
    pub mod_date: Option<String>,
}

impl DocumentMetadata {
    /// Check if no metadata fields are set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
            && self.creator.is_none()
            && self.producer.is_none()
            && self.creation_date.is_none()
            && self.mod_date.is_none()
    }
}

/// PDF reader performing pre-flight checks before parsing.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the PDF file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is empty or not a valid PDF
    /// - The file is encrypted and the empty password does not open it
    /// - The document has no pages
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        if !path.exists() {
            return Err(SplitError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(SplitError::not_a_file(path.to_path_buf()));
        }

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        if file_size == 0 {
            return Err(SplitError::failed_to_load_pdf(
                path.to_path_buf(),
                "File is empty",
            ));
        }

        let document =
            Document::load(path).map_err(|e| classify_load_error(path, e.to_string()))?;

        let page_count = document.get_pages().len() as u32;
        if page_count == 0 {
            return Err(SplitError::failed_to_load_pdf(
                path.to_path_buf(),
                "PDF has no pages",
            ));
        }

        let is_encrypted = document.is_encrypted();

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            is_encrypted,
            file_size,
        })
    }
}

/// Classify a load failure by its error message.
///
/// lopdf reports an undecryptable document through its error text rather
/// than a dedicated variant, so an encryption- or password-related
/// message becomes [`SplitError::EncryptedPdf`] and anything else stays a
/// generic load failure.
fn classify_load_error(path: &Path, message: String) -> SplitError {
    let lowered = message.to_lowercase();
    if lowered.contains("crypt") || lowered.contains("password") {
        SplitError::encrypted_pdf(path.to_path_buf())
    } else {
        SplitError::failed_to_load_pdf(path.to_path_buf(), message)
    }
}

/// Read the trailer's info dictionary, if present.
fn read_info_dictionary(doc: &Document) -> DocumentMetadata {
    let mut metadata = DocumentMetadata::default();

    let Ok(info_obj) = doc.trailer.get(b"Info") else {
        return metadata;
    };

    let dict = match info_obj {
        Object::Reference(info_ref) => match doc.get_object(*info_ref) {
            Ok(Object::Dictionary(dict)) => dict,
            _ => return metadata,
        },
        Object::Dictionary(dict) => dict,
        _ => return metadata,
    };

    metadata.title = dict_string(dict, b"Title");
    metadata.author = dict_string(dict, b"Author");
    metadata.subject = dict_string(dict, b"Subject");
    metadata.keywords = dict_string(dict, b"Keywords");
    metadata.creator = dict_string(dict, b"Creator");
    metadata.producer = dict_string(dict, b"Producer");
    metadata.creation_date = dict_string(dict, b"CreationDate");
    metadata.mod_date = dict_string(dict, b"ModDate");

    metadata
}

fn dict_string(dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        _ => None,
    })
}

/// Decode a PDF text string: UTF-16BE when BOM-prefixed, otherwise
/// treated as PDFDocEncoding (approximated as Latin-1).
fn decode_pdf_string(bytes: &[u8]) -> Option<String> {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect();
        String::from_utf16(&units).ok()
    } else {
        Some(bytes.iter().map(|&b| b as char).collect())
    }
}
