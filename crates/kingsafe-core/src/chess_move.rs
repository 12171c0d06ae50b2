//! Move representation: an ordered (source, destination) pair.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareParseError;
use crate::square::Square;

/// A move from one square to another.
///
/// Promotion and capture are not stored; both follow from the board the move
/// is played on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    /// Build a move from two algebraic square names.
    pub fn from_names(source: &str, dest: &str) -> Result<Move, SquareParseError> {
        Ok(Move::new(source.parse()?, dest.parse()?))
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }
}

/// Renders as two uppercase squares separated by one space, e.g. `E2 E4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// Parses the whitespace-separated form produced by `Display`.
impl FromStr for Move {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Move, SquareParseError> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(source), Some(dest), None) => Move::from_names(source, dest),
            _ => Err(SquareParseError {
                found: s.to_string(),
            }),
        }
    }
}
