//! Board squares, stored as a row-major index (A1 = 0, B1 = 1, ..., H8 = 63).

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::SquareParseError;

/// A square on the board.
///
/// Index = row * 8 + col, where row 0 is rank 1 and col 0 is file A.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from `(row, col)`, returning `None` if off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Parse algebraic text (e.g. `"E4"`, `" e4"`) into a square.
    pub fn from_algebraic(text: &str) -> Option<Square> {
        let (row, col) = codec::to_indices(text)?;
        Square::new(row, col)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row index; 0 is rank 1.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Column index; 0 is file A.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// The square `(d_row, d_col)` away from this one, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Some(Square(row as u8 * 8 + col as u8))
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'A' + self.col()) as char;
        write!(f, "{file}{}", self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Square, SquareParseError> {
        Square::from_algebraic(s).ok_or_else(|| SquareParseError {
            found: s.to_string(),
        })
    }
}
