//! Page range expressions.
//!
//! A range expression is a comma-separated list of tokens, each of which
//! is a single page (`"7"`), a bounded range (`"1-5"`), or an open range
//! ending at the last page of the document (`"9-end"`, case-insensitive).
//! All page numbers are 1-indexed and ranges are inclusive.
//!
//! Parsing is purely syntactic: bounds are checked later, once the
//! document's page count is known, because an open range cannot be
//! resolved before then.
//!
//! # Examples
//!
//! ```
//! use pdfsplit::range::{PageInterval, parse_ranges};
//!
//! let intervals = parse_ranges("1-3,5,7-end").unwrap();
//! assert_eq!(intervals.len(), 3);
//! assert_eq!(intervals[0].resolve(10).unwrap().as_tuple(), (1, 3));
//! assert_eq!(intervals[2].resolve(10).unwrap().as_tuple(), (7, 10));
//! ```

use std::fmt;

use crate::error::{Result, SplitError};

/// End bound of a page interval.
///
/// The open-ended form is a tagged sentinel rather than a numeric
/// stand-in, so it can only be used after explicit resolution against a
/// page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    /// A concrete 1-indexed page number.
    Page(u32),
    /// The last page of the document, whatever that turns out to be.
    Last,
}

/// An inclusive interval of 1-indexed pages, possibly open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInterval {
    /// First page of the interval (1-indexed).
    pub start: u32,
    /// End bound of the interval.
    pub end: RangeEnd,
}

/// A page interval resolved against a concrete document.
///
/// Invariant: `1 <= start <= end <= total_pages` of the document it was
/// resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInterval {
    /// First page (1-indexed, inclusive).
    pub start: u32,
    /// Last page (1-indexed, inclusive).
    pub end: u32,
}

impl ResolvedInterval {
    /// Number of pages covered by this interval.
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }

    /// The interval as a `(start, end)` pair.
    pub fn as_tuple(&self) -> (u32, u32) {
        (self.start, self.end)
    }
}

impl fmt::Display for ResolvedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl PageInterval {
    /// Interval covering a single page.
    pub fn single(page: u32) -> Self {
        Self {
            start: page,
            end: RangeEnd::Page(page),
        }
    }

    /// Interval with both bounds given.
    pub fn bounded(start: u32, end: u32) -> Self {
        Self {
            start,
            end: RangeEnd::Page(end),
        }
    }

    /// Interval from `start` to the last page of the document.
    pub fn open(start: u32) -> Self {
        Self {
            start,
            end: RangeEnd::Last,
        }
    }

    /// Interval covering the whole document.
    pub fn whole_document() -> Self {
        Self::open(1)
    }

    /// Resolve the interval against a document's page count.
    ///
    /// Replaces the open-end sentinel with `total_pages` and validates
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns a range-bounds error if the interval starts at page 0,
    /// is inverted, or extends past the end of the document.
    pub fn resolve(&self, total_pages: u32) -> Result<ResolvedInterval> {
        let end = match self.end {
            RangeEnd::Page(n) => n,
            RangeEnd::Last => total_pages,
        };

        if self.start == 0 || end == 0 || self.start > end || end > total_pages {
            return Err(SplitError::range_bounds(self.to_string(), total_pages));
        }

        Ok(ResolvedInterval {
            start: self.start,
            end,
        })
    }
}

impl fmt::Display for PageInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            RangeEnd::Page(end) if end == self.start => write!(f, "{}", self.start),
            RangeEnd::Page(end) => write!(f, "{}-{}", self.start, end),
            RangeEnd::Last => write!(f, "{}-end", self.start),
        }
    }
}

/// Parse a range expression into an ordered list of intervals.
///
/// An empty (or whitespace-only) expression means the whole document.
/// Tokens are kept in input order; overlapping or duplicate ranges are
/// passed through untouched, and each produces its own output file
/// downstream.
///
/// # Errors
///
/// Returns a range-syntax error for any token that is not a page
/// number, `N-M`, or `N-end`.
///
/// # Examples
///
/// ```
/// use pdfsplit::range::parse_ranges;
///
/// assert_eq!(parse_ranges("1-3,5").unwrap().len(), 2);
/// assert!(parse_ranges("abc").is_err());
/// ```
pub fn parse_ranges(expr: &str) -> Result<Vec<PageInterval>> {
    if expr.trim().is_empty() {
        return Ok(vec![PageInterval::whole_document()]);
    }

    expr.split(',').map(|token| parse_token(token.trim())).collect()
}

/// Parse a single token of a range expression.
fn parse_token(token: &str) -> Result<PageInterval> {
    if let Some((start_str, end_str)) = token.split_once('-') {
        let start = parse_page_number(start_str, token)?;
        let end_str = end_str.trim();

        if end_str.eq_ignore_ascii_case("end") {
            Ok(PageInterval::open(start))
        } else {
            Ok(PageInterval::bounded(start, parse_page_number(end_str, token)?))
        }
    } else {
        Ok(PageInterval::single(parse_page_number(token, token)?))
    }
}

fn parse_page_number(s: &str, token: &str) -> Result<u32> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| SplitError::range_syntax(token))
}
