//! Conversion between algebraic square names ("A1".."H8") and zero-based
//! `(row, col)` grid indices.
//!
//! Row 0 is rank 1 and column 0 is file A. Both directions return `None` for
//! anything outside the board instead of failing.

const FILES: &[u8; 8] = b"ABCDEFGH";

/// Convert algebraic text such as `"E2"` or `" e2 "` into `(row, col)`.
///
/// Surrounding whitespace is ignored and the file letter is case-insensitive.
/// Returns `None` unless the trimmed text is exactly one file letter A-H
/// followed by one rank digit 1-8.
pub fn to_indices(text: &str) -> Option<(u8, u8)> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file_byte = bytes[0].to_ascii_uppercase();
    let rank_byte = bytes[1];

    if !(b'A'..=b'H').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
        return None;
    }

    Some((rank_byte - b'1', file_byte - b'A'))
}

/// Convert `(row, col)` into uppercase algebraic text such as `"E2"`.
///
/// Returns `None` if either index lies outside `0..=7`.
pub fn to_algebraic(row: i32, col: i32) -> Option<String> {
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return None;
    }
    let file = FILES[col as usize] as char;
    Some(format!("{file}{}", row + 1))
}
