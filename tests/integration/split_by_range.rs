//! End-to-end tests for range-mode splitting.

use crate::common::{dir_entries, page_count, sample_pdf};
use pdfsplit::error::SplitError;
use pdfsplit::io::reader::PdfReader;
use pdfsplit::plan::SplitPlan;
use pdfsplit::range::parse_ranges;
use pdfsplit::split::Splitter;
use tempfile::TempDir;

#[test]
fn test_empty_expression_copies_whole_document() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 6);
    let output_dir = temp_dir.path().join("split_output");

    let source = PdfReader::new().load(&input).unwrap();
    let intervals = parse_ranges("").unwrap();
    let plan = SplitPlan::by_ranges(&intervals, source.page_count, &input).unwrap();

    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    assert_eq!(outcome.files.len(), 1);
    assert_eq!(dir_entries(&output_dir), vec!["report_pages_1-6.pdf"]);
    assert_eq!(page_count(&output_dir.join("report_pages_1-6.pdf")), 6);
}

#[test]
fn test_mixed_ranges_produce_one_file_each() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 12);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let intervals = parse_ranges("1-5, 8, 11-end").unwrap();
    let plan = SplitPlan::by_ranges(&intervals, source.page_count, &input).unwrap();

    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    assert_eq!(outcome.files.len(), 3);
    assert_eq!(outcome.pages_copied, 8); // 5 + 1 + 2
    assert_eq!(
        dir_entries(&output_dir),
        vec![
            "report_pages_1-5.pdf",
            "report_pages_11-12.pdf",
            "report_pages_8-8.pdf",
        ]
    );
    assert_eq!(page_count(&output_dir.join("report_pages_1-5.pdf")), 5);
    assert_eq!(page_count(&output_dir.join("report_pages_8-8.pdf")), 1);
    assert_eq!(page_count(&output_dir.join("report_pages_11-12.pdf")), 2);
}

#[test]
fn test_open_range_resolves_to_last_page() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 9);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let intervals = parse_ranges("4-end").unwrap();
    let plan = SplitPlan::by_ranges(&intervals, source.page_count, &input).unwrap();

    Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    // Open end resolves to the document's final page in the file name
    assert_eq!(dir_entries(&output_dir), vec!["report_pages_4-9.pdf"]);
    assert_eq!(page_count(&output_dir.join("report_pages_4-9.pdf")), 6);
}

#[test]
fn test_overlapping_ranges_are_not_merged() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 10);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let intervals = parse_ranges("1-5,3-8").unwrap();
    let plan = SplitPlan::by_ranges(&intervals, source.page_count, &input).unwrap();

    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    // Overlaps pass through untouched, one file per range
    assert_eq!(outcome.files.len(), 2);
    assert_eq!(page_count(&output_dir.join("report_pages_1-5.pdf")), 5);
    assert_eq!(page_count(&output_dir.join("report_pages_3-8.pdf")), 6);
}

#[test]
fn test_out_of_bounds_range_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 10);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let intervals = parse_ranges("1-2,50-60").unwrap();

    // Plan construction fails fast, before any file is written
    let err = SplitPlan::by_ranges(&intervals, source.page_count, &input).unwrap_err();
    assert!(matches!(err, SplitError::RangeBounds { .. }));
    assert!(!output_dir.exists());
}

#[test]
fn test_progress_matches_planned_page_copies() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "report.pdf", 10);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let intervals = parse_ranges("1-4,8-end").unwrap();
    let plan = SplitPlan::by_ranges(&intervals, source.page_count, &input).unwrap();

    let mut ticks = 0u64;
    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || ticks += 1)
        .unwrap();

    assert_eq!(ticks, plan.total_page_copies());
    assert_eq!(ticks, outcome.pages_copied);
}
