//! Pawn move geometry: pushes and diagonal captures. No en passant.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Push pawn destinations in the order: single push, left capture, right
/// capture, double push.
///
/// The double push is gated only by the pawn standing on its home row and
/// the square it passes over being empty. The landing square's occupancy is
/// not checked.
pub(super) fn gen_pawn(board: &Board, from: Square, color: Color, targets: &mut Vec<Square>) {
    let forward = color.forward();
    let Some(one_step) = from.offset(forward, 0) else {
        return;
    };

    let single_push_open = !board.is_occupied(one_step);
    if single_push_open {
        targets.push(one_step);
    }

    for d_col in [-1, 1] {
        if let Some(diagonal) = from.offset(forward, d_col)
            && let Some(occupant) = board.piece_at(diagonal)
            && occupant.color() != color
        {
            targets.push(diagonal);
        }
    }

    if from.row() == color.pawn_home_row()
        && single_push_open
        && let Some(two_step) = one_step.offset(forward, 0)
    {
        targets.push(two_step);
    }
}
