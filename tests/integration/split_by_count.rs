//! End-to-end tests for count-mode splitting.

use crate::common::{dir_entries, page_count, sample_pdf};
use pdfsplit::io::reader::PdfReader;
use pdfsplit::plan::SplitPlan;
use pdfsplit::split::Splitter;
use tempfile::TempDir;

#[test]
fn test_even_chunks() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "book.pdf", 10);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let plan = SplitPlan::by_count(source.page_count, 5, &input).unwrap();

    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    assert_eq!(outcome.files.len(), 2);
    assert_eq!(
        dir_entries(&output_dir),
        vec!["book_pages_1-5.pdf", "book_pages_6-10.pdf"]
    );
    assert_eq!(page_count(&output_dir.join("book_pages_1-5.pdf")), 5);
    assert_eq!(page_count(&output_dir.join("book_pages_6-10.pdf")), 5);
}

#[test]
fn test_short_final_chunk() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "book.pdf", 10);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let plan = SplitPlan::by_count(source.page_count, 4, &input).unwrap();

    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    assert_eq!(outcome.files.len(), 3);
    assert_eq!(page_count(&output_dir.join("book_pages_1-4.pdf")), 4);
    assert_eq!(page_count(&output_dir.join("book_pages_5-8.pdf")), 4);
    assert_eq!(page_count(&output_dir.join("book_pages_9-10.pdf")), 2);
}

#[test]
fn test_chunk_larger_than_document() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "book.pdf", 3);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let plan = SplitPlan::by_count(source.page_count, 100, &input).unwrap();

    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    // A single file covering the whole document
    assert_eq!(outcome.files.len(), 1);
    assert_eq!(dir_entries(&output_dir), vec!["book_pages_1-3.pdf"]);
    assert_eq!(page_count(&output_dir.join("book_pages_1-3.pdf")), 3);
}

#[test]
fn test_single_page_chunks() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_pdf(&temp_dir, "book.pdf", 4);
    let output_dir = temp_dir.path().join("out");

    let source = PdfReader::new().load(&input).unwrap();
    let plan = SplitPlan::by_count(source.page_count, 1, &input).unwrap();

    let outcome = Splitter::new()
        .split(&source, &plan, &output_dir, || {})
        .unwrap();

    assert_eq!(outcome.files.len(), 4);
    assert_eq!(outcome.pages_copied, 4);
    for name in dir_entries(&output_dir) {
        assert_eq!(page_count(&output_dir.join(name)), 1);
    }
}
