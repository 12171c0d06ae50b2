//! Error types for square parsing, placement parsing and move execution.

use std::fmt;

use crate::square::Square;

/// Text that does not name a square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{found}\"")]
pub struct SquareParseError {
    /// The rejected text.
    pub found: String,
}

/// Text that does not name a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: \"{found}\"")]
pub struct ColorParseError {
    /// The rejected text.
    pub found: String,
}

/// Errors from [`Board::move_piece`](crate::Board::move_piece) and
/// [`Board::get_piece`](crate::Board::get_piece).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A square name failed to parse.
    #[error("Invalid position format")]
    InvalidSquare {
        #[from]
        source: SquareParseError,
    },
    /// The source square holds no piece.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The placement does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            PlacementError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            PlacementError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
