//! Explain why a piece cannot make a move that is not pseudo-legal.
//!
//! Only consulted after a move has been found in neither the legal nor the
//! self-check set, and after the ownership checks have passed.

use kingsafe_core::{Board, Move, Piece, PieceKind, Square};

use crate::error::GeometryError;

/// Return the most specific reason `piece` cannot make `mv` on `board`.
pub(crate) fn diagnose(board: &Board, mv: Move, piece: Piece) -> GeometryError {
    let src = mv.source();
    let dst = mv.dest();
    let row_diff = dst.row() as i8 - src.row() as i8;
    let col_diff = dst.col() as i8 - src.col() as i8;
    let unreachable = GeometryError::Unreachable { kind: piece.kind() };

    match piece.kind() {
        PieceKind::Pawn => diagnose_pawn(board, src, dst, piece, row_diff, col_diff.abs()),
        PieceKind::Knight => {
            let (r, c) = (row_diff.abs(), col_diff.abs());
            if (r, c) == (2, 1) || (r, c) == (1, 2) {
                unreachable
            } else {
                GeometryError::KnightShape
            }
        }
        PieceKind::Bishop => {
            if row_diff.abs() != col_diff.abs() {
                GeometryError::BishopShape
            } else {
                path_reason(board, src, dst, unreachable)
            }
        }
        PieceKind::Rook => {
            if row_diff != 0 && col_diff != 0 {
                GeometryError::RookShape
            } else {
                path_reason(board, src, dst, unreachable)
            }
        }
        PieceKind::Queen => {
            let straight = row_diff == 0 || col_diff == 0;
            let diagonal = row_diff.abs() == col_diff.abs();
            if !straight && !diagonal {
                GeometryError::QueenShape
            } else {
                path_reason(board, src, dst, unreachable)
            }
        }
        PieceKind::King => {
            if row_diff.abs() > 1 || col_diff.abs() > 1 {
                GeometryError::KingShape
            } else {
                unreachable
            }
        }
    }
}

fn diagnose_pawn(
    board: &Board,
    src: Square,
    dst: Square,
    pawn: Piece,
    row_diff: i8,
    col_dist: i8,
) -> GeometryError {
    let color = pawn.color();
    let forward = color.forward();

    if col_dist == 0 {
        if board.is_occupied(dst) {
            return GeometryError::PawnCaptureForward;
        }
        if row_diff == 2 * forward && src.row() == color.pawn_home_row() {
            return match src.offset(forward, 0) {
                Some(middle) if board.is_occupied(middle) => GeometryError::PathBlocked,
                _ => GeometryError::Unreachable { kind: PieceKind::Pawn },
            };
        }
        return GeometryError::InvalidPawnMove;
    }

    if col_dist == 1 && row_diff == forward && !board.is_occupied(dst) {
        return GeometryError::PawnDiagonalWithoutCapture;
    }

    GeometryError::InvalidPawnMove
}

/// `PathBlocked` if any square strictly between `src` and `dst` is occupied,
/// otherwise `fallback`. Assumes the two squares share a line or diagonal.
fn path_reason(board: &Board, src: Square, dst: Square, fallback: GeometryError) -> GeometryError {
    let step_row = (dst.row() as i8 - src.row() as i8).signum();
    let step_col = (dst.col() as i8 - src.col() as i8).signum();

    let mut current = src;
    while let Some(next) = current.offset(step_row, step_col) {
        if next == dst {
            break;
        }
        if board.is_occupied(next) {
            return GeometryError::PathBlocked;
        }
        current = next;
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::diagnose;
    use crate::error::GeometryError;
    use kingsafe_core::{Board, Move, PieceKind};

    fn reason(board: &Board, mv: &str) -> GeometryError {
        let mv: Move = mv.parse().unwrap();
        let piece = board.piece_at(mv.source()).unwrap();
        diagnose(board, mv, piece)
    }

    #[test]
    fn pawn_reasons() {
        let board: Board = "4k3/8/8/8/8/3n4/3P1P2/4K3".parse().unwrap();
        assert_eq!(reason(&board, "D2 D3"), GeometryError::PawnCaptureForward);
        assert_eq!(reason(&board, "D2 D4"), GeometryError::PathBlocked);
        assert_eq!(reason(&board, "F2 G3"), GeometryError::PawnDiagonalWithoutCapture);
        assert_eq!(reason(&board, "F2 F5"), GeometryError::InvalidPawnMove);
        assert_eq!(reason(&board, "F2 F1"), GeometryError::InvalidPawnMove);
    }

    #[test]
    fn pawn_backwards_is_invalid() {
        let board: Board = "4k3/8/8/8/4P3/8/8/4K3".parse().unwrap();
        assert_eq!(reason(&board, "E4 E3"), GeometryError::InvalidPawnMove);
    }

    #[test]
    fn slider_reasons() {
        let board = Board::starting_position();
        assert_eq!(reason(&board, "A1 A5"), GeometryError::PathBlocked);
        assert_eq!(reason(&board, "A1 B3"), GeometryError::RookShape);
        assert_eq!(reason(&board, "C1 C3"), GeometryError::BishopShape);
        assert_eq!(reason(&board, "C1 E3"), GeometryError::PathBlocked);
        assert_eq!(reason(&board, "D1 E3"), GeometryError::QueenShape);
        assert_eq!(reason(&board, "D1 D4"), GeometryError::PathBlocked);
    }

    #[test]
    fn knight_and_king_shapes() {
        let board = Board::starting_position();
        assert_eq!(reason(&board, "B1 B3"), GeometryError::KnightShape);
        assert_eq!(reason(&board, "E1 E3"), GeometryError::KingShape);
        assert_eq!(
            reason(&board, "E1 E2"),
            GeometryError::Unreachable { kind: PieceKind::King }
        );
    }
}
