//! Utilities for parsing and formatting "A1"-style cell references and ranges.

use crate::types::{Frame, Point};

/// Parse a cell reference like "A1" into a [`Point`] (0-indexed).
///
/// Tolerates `$` anchors and lowercase letters.
#[must_use]
pub fn parse_ref(cell_ref: &str) -> Option<Point> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            let upper = ch.to_ascii_uppercase();
            col = col * 26 + (u32::from(upper) - u32::from('A') + 1);
            saw_col = true;
        } else if ch.is_ascii_digit() {
            row = row * 10 + (u32::from(ch) - u32::from('0'));
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row {
        return None;
    }

    Some(Point::new(col.saturating_sub(1), row.saturating_sub(1)))
}

/// Parse a range like "A1:B10" or a single reference like "A1" into a
/// [`Frame`]. A single reference yields the collapsed frame for that cell;
/// a backwards range ("B10:A1") is normalized.
#[must_use]
pub fn parse_range(range: &str) -> Option<Frame> {
    if let Some((start, end)) = range.split_once(':') {
        let start = parse_ref(start)?;
        let end = parse_ref(end)?;
        Some(Frame::spanning(start, end))
    } else {
        parse_ref(range).map(Frame::single)
    }
}

/// Convert a 0-based column index to column letters (A, B, ..., Z, AA, AB, ...)
#[must_use]
pub fn col_to_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = col + 1; // Convert to 1-based
    while n > 0 {
        n -= 1;
        let c = char::from_u32(u32::from('A') + (n % 26)).unwrap_or('A');
        result.insert(0, c);
        n /= 26;
    }
    result
}

/// Format a point as a cell reference, e.g. `(1, 2)` -> "B3".
#[must_use]
pub fn format_ref(p: Point) -> String {
    format!("{}{}", col_to_letter(p.x), p.y + 1)
}

/// Format a frame as a range reference, e.g. "A1:B10". A collapsed frame
/// formats as its single cell reference.
#[must_use]
pub fn format_range(frame: Frame) -> String {
    if frame.is_collapsed() {
        format_ref(frame.origin())
    } else {
        format!("{}:{}", format_ref(frame.origin()), format_ref(frame.corner()))
    }
}
