//! Line classification
//!
//! A line is data only when its first byte is an ASCII digit. Everything else
//! (headers, blank lines, notes) is passed through as a comment.

/// Kind of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Data,
    Comment,
}

/// Classify a raw input line by its first byte only
pub fn classify_line(line: &[u8]) -> LineKind {
    match line.first() {
        Some(b) if b.is_ascii_digit() => LineKind::Data,
        _ => LineKind::Comment,
    }
}
