//! Error handling tests.

use crate::common::sample_pdf;
use pdfsplit::error::SplitError;
use pdfsplit::io::reader::PdfReader;
use pdfsplit::plan::SplitPlan;
use pdfsplit::range::parse_ranges;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_nonexistent_input() {
    let err = PdfReader::new()
        .load(Path::new("/nonexistent/missing.pdf"))
        .unwrap_err();
    assert!(matches!(err, SplitError::FileNotFound { .. }));
}

#[test]
fn test_directory_as_input() {
    let temp_dir = TempDir::new().unwrap();

    let err = PdfReader::new().load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, SplitError::NotAFile { .. }));
}

#[test]
fn test_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.pdf");
    std::fs::write(&path, b"").unwrap();

    let err = PdfReader::new().load(&path).unwrap_err();
    assert!(matches!(err, SplitError::FailedToLoadPdf { .. }));
}

#[test]
fn test_not_a_pdf() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.pdf");
    std::fs::write(&path, b"plain text, not a PDF").unwrap();

    let err = PdfReader::new().load(&path).unwrap_err();
    assert!(matches!(err, SplitError::FailedToLoadPdf { .. }));
}

#[test]
fn test_malformed_range_expression() {
    let err = parse_ranges("1-abc").unwrap_err();
    assert!(matches!(err, SplitError::RangeSyntax { .. }));

    let err = parse_ranges("1-2-3").unwrap_err();
    assert!(matches!(err, SplitError::RangeSyntax { .. }));
}

#[test]
fn test_bounds_error_names_page_count() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "small.pdf", 5);

    let source = PdfReader::new().load(&input).unwrap();
    let intervals = parse_ranges("3-9").unwrap();

    let err = SplitPlan::by_ranges(&intervals, source.page_count, &input).unwrap_err();
    match err {
        SplitError::RangeBounds { total_pages, .. } => assert_eq!(total_pages, 5),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_zero_pages_per_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "small.pdf", 5);

    let err = SplitPlan::by_count(5, 0, &input).unwrap_err();
    assert!(matches!(err, SplitError::InvalidArgument { .. }));
}

#[test]
fn test_zero_page_range_rejected_at_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "small.pdf", 5);

    // "0-2" parses (it is integer-shaped) but fails bounds validation
    let intervals = parse_ranges("0-2").unwrap();
    let err = SplitPlan::by_ranges(&intervals, 5, &input).unwrap_err();
    assert!(matches!(err, SplitError::RangeBounds { .. }));
}
