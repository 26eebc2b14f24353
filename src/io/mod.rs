//! PDF input/output operations.

pub mod reader;
pub mod writer;

pub use reader::{DocumentInfo, DocumentMetadata, LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions};
