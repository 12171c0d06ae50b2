//! King location and check detection.
//!
//! A king is in check when its square is among the pseudo-legal destinations
//! of any enemy piece. Attacks are computed with the same geometry used for
//! move generation.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::attacks;
use crate::square::Square;

/// Return the square of the first king of `color`, scanning A1 to H8.
///
/// `None` if that king is not on the board.
pub fn find_king(color: Color, board: &Board) -> Option<Square> {
    board.king_square(color)
}

/// Return `true` if the king of `color` is attacked on `board`.
///
/// A missing king is never in check.
pub fn is_in_check(color: Color, board: &Board) -> bool {
    let Some(king_sq) = find_king(color, board) else {
        return false;
    };

    board
        .pieces(color.flip())
        .any(|(from, _)| attacks(board, from, king_sq))
}
