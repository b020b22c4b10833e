//! Page range expressions
//!
//! A range expression is a comma-separated list of tokens:
//! - `N`   - a single 1-based page; negative values count from the end (`-1` is the last page)
//! - `A-B` - an inclusive range, either bound may be negative (`-3--1` is the last three pages)
//! - `A-`  - an open range from `A` to the last page
//!
//! Tokens that don't match the grammar are dropped. Resolution keeps token order
//! and duplicates, and does not filter out-of-bounds indices; see [`select_pages`]
//! for the filtered form the commands use.

use crate::types::{JigError, Result};

/// One parsed token of a range expression. Bounds are 1-based and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    Single(i64),
    Closed(i64, i64),
    Open(i64),
}

impl RangeToken {
    /// Classify a single token, returning `None` when it is malformed.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (first, rest) = split_page_number(token)?;

        let Some(rest) = rest.strip_prefix('-') else {
            return rest.is_empty().then_some(RangeToken::Single(first));
        };
        if rest.is_empty() {
            return Some(RangeToken::Open(first));
        }

        let (second, tail) = split_page_number(rest)?;
        tail.is_empty().then_some(RangeToken::Closed(first, second))
    }

    /// Zero-based `(start, end)` bounds of this token for a document of `page_count` pages.
    pub fn bounds(self, page_count: usize) -> (i64, i64) {
        let (start, end) = match self {
            RangeToken::Single(n) => (n, n),
            RangeToken::Closed(a, b) => (a, b),
            RangeToken::Open(a) => (a, -1),
        };
        (to_zero_based(start, page_count), to_zero_based(end, page_count))
    }
}

/// Read an optionally negative page number from the front of `s`.
fn split_page_number(s: &str) -> Option<(i64, &str)> {
    let digits_start = usize::from(s.starts_with('-'));
    let digits_len = s[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    let end = digits_start + digits_len;
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

/// Convert a 1-based page number to a zero-based index.
///
/// Negative numbers count from the end, so `-1` maps to the last index.
pub fn to_zero_based(page: i64, page_count: usize) -> i64 {
    if page < 0 {
        page_count as i64 + page
    } else {
        page - 1
    }
}

/// Resolve a range expression into zero-based indices.
///
/// Reversed ranges resolve to nothing. Indices are not checked against `page_count`.
pub fn resolve_range(expression: &str, page_count: usize) -> Vec<i64> {
    expression
        .split(',')
        .filter_map(RangeToken::parse)
        .flat_map(|token| {
            let (start, end) = token.bounds(page_count);
            start..=end
        })
        .collect()
}

/// Resolve a range expression and keep only indices of existing pages.
///
/// Each token is clipped to the document before it is expanded, so the cost
/// follows the page count rather than the bounds written in the expression.
/// Token order and duplicates are kept. Returns [`JigError::InvalidRange`]
/// when nothing is left.
pub fn select_pages(expression: &str, page_count: usize) -> Result<Vec<usize>> {
    let last = page_count as i64 - 1;
    let selected: Vec<usize> = expression
        .split(',')
        .filter_map(RangeToken::parse)
        .flat_map(|token| {
            let (start, end) = token.bounds(page_count);
            (start.max(0)..=end.min(last)).map(|idx| idx as usize)
        })
        .collect();

    if selected.is_empty() {
        return Err(JigError::InvalidRange(expression.to_string()));
    }
    Ok(selected)
}
