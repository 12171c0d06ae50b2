//! King move geometry.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::sliders::QUEEN_DIRECTIONS;

/// Push king destinations: one step in each of the queen's eight directions.
pub(super) fn gen_king(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    super::gen_steps(board, from, color, &QUEEN_DIRECTIONS, targets);
}
