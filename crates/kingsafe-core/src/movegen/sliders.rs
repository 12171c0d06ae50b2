//! Bishop, rook and queen move geometry.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Diagonal directions as `(d_row, d_col)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

/// Orthogonal directions as `(d_row, d_col)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

/// Walk each ray from `from` until the edge or the first occupied square.
///
/// An enemy on the ray is included and ends it; a friendly piece ends it
/// without being included.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => targets.push(next),
                Some(occupant) => {
                    if occupant.color() != color {
                        targets.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
