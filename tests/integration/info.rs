//! Tests for document inspection.

use crate::common::{sample_pdf, sample_pdf_with_metadata};
use pdfsplit::io::reader::PdfReader;
use tempfile::TempDir;

#[test]
fn test_info_reports_basic_fields() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 7);

    let source = PdfReader::new().load(&input).unwrap();
    let info = source.info();

    assert_eq!(info.filename, "report.pdf");
    assert_eq!(info.pages, 7);
    assert!(!info.is_encrypted);
    assert!(info.file_size > 0);
    assert_eq!(info.version, "1.7");
    assert!(info.metadata.is_empty());
}

#[test]
fn test_info_reads_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf_with_metadata(&temp_dir, "report.pdf", 2, "Annual Report", "A. Writer");

    let source = PdfReader::new().load(&input).unwrap();
    let info = source.info();

    assert_eq!(info.metadata.title.as_deref(), Some("Annual Report"));
    assert_eq!(info.metadata.author.as_deref(), Some("A. Writer"));
    assert!(!info.metadata.is_empty());
}

#[test]
fn test_info_serializes_to_camel_case_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 3);

    let source = PdfReader::new().load(&input).unwrap();
    let json = serde_json::to_string_pretty(&source.info()).unwrap();

    assert!(json.contains("\"isEncrypted\""));
    assert!(json.contains("\"fileSize\""));
    assert!(json.contains("\"pages\": 3"));
}

#[test]
fn test_info_does_not_modify_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 3);

    let before = std::fs::read(&input).unwrap();
    let _ = PdfReader::new().load(&input).unwrap().info();
    let after = std::fs::read(&input).unwrap();

    assert_eq!(before, after);
}
