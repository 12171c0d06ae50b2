//! Piece-placement notation (the first field of FEN) for [`Board`].
//!
//! Only piece placement is read: this engine has no side to move, castling
//! rights, en passant square or move counters, so any further
//! whitespace-separated fields are ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(text: &str) -> Result<Board, PlacementError> {
        let placement = text.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Ranks are written from 8 down to 1.
            let row = 7 - rank_index as u8;
            let mut col: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece = Piece::from_char(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                if let Some(sq) = Square::new(row, col as u8) {
                    board.set_piece(sq, piece);
                }
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: col,
                });
            }
        }

        Ok(board)
    }
}

/// Writes the board in placement notation.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0u8..8).rev() {
            let mut empty = 0;
            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::Board;
    use crate::error::PlacementError;

    #[test]
    fn starting_placement_matches_setup() {
        let parsed: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
        assert_eq!(Board::starting_position().to_string(), STARTING_PLACEMENT);
    }

    #[test]
    fn trailing_fields_ignored() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(board.count(), 2);
        assert_eq!(board.to_string(), "4k3/8/8/8/8/8/8/4K3");
    }

    #[test]
    fn display_roundtrip() {
        let text = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(PlacementError::WrongRankCount { found: 3 })
        );
        assert!(matches!(
            "".parse::<Board>(),
            Err(PlacementError::WrongRankCount { found: 1 })
        ));
    }

    #[test]
    fn bad_rank_length() {
        assert_eq!(
            "9/8/8/8/8/8/8/8".parse::<Board>(),
            Err(PlacementError::InvalidPieceChar { character: '9' })
        );
        assert_eq!(
            "7/8/8/8/8/8/8/8".parse::<Board>(),
            Err(PlacementError::BadRankLength { rank_index: 0, length: 7 })
        );
        assert_eq!(
            "ppppppppp/8/8/8/8/8/8/8".parse::<Board>(),
            Err(PlacementError::BadRankLength { rank_index: 0, length: 9 })
        );
    }

    #[test]
    fn invalid_piece_char() {
        assert_eq!(
            "8/8/8/8/8/8/8/7x".parse::<Board>(),
            Err(PlacementError::InvalidPieceChar { character: 'x' })
        );
    }
}
