//! Pseudo-legal move geometry.
//!
//! A destination is pseudo-legal when the piece's movement pattern and the
//! board's occupancy allow it. Whether the move leaves the mover's own king
//! attacked is not considered here; see [`crate::check`].

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

/// Return every square the piece on `from` could move to, ignoring check.
///
/// Empty when `from` holds no piece. The piece's own square is never included.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let color = piece.color();
    let mut targets = Vec::with_capacity(28);
    match piece.kind() {
        PieceKind::Pawn => pawns::gen_pawn(board, from, color, &mut targets),
        PieceKind::Knight => knights::gen_knight(board, from, color, &mut targets),
        PieceKind::Bishop => sliders::gen_slider(board, from, color, &BISHOP_DIRECTIONS, &mut targets),
        PieceKind::Rook => sliders::gen_slider(board, from, color, &ROOK_DIRECTIONS, &mut targets),
        PieceKind::Queen => sliders::gen_slider(board, from, color, &QUEEN_DIRECTIONS, &mut targets),
        PieceKind::King => king::gen_king(board, from, color, &mut targets),
    }
    targets
}

/// Return `true` if the piece on `from` could pseudo-legally move to `target`.
///
/// This is the engine's definition of an attack: pawns only ever attack
/// their capture diagonals because those are their only moves onto an
/// occupied square.
pub fn attacks(board: &Board, from: Square, target: Square) -> bool {
    pseudo_legal_moves(board, from).contains(&target)
}

/// Shared stepping rule for knights and kings: each on-board offset counts
/// unless a friendly piece stands there.
fn gen_steps(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], targets: &mut Vec<Square>) {
    for &(d_row, d_col) in offsets {
        let Some(dst) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(dst) {
            Some(occupant) if occupant.color() == color => {}
            _ => targets.push(dst),
        }
    }
}
