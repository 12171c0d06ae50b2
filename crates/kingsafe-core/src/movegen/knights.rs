//! Knight move geometry.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// The eight L-shaped jumps as `(d_row, d_col)`.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Push knight destinations. Intermediate squares are never inspected.
pub(super) fn gen_knight(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    super::gen_steps(board, from, color, &KNIGHT_OFFSETS, targets);
}
