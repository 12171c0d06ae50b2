//! Move execution via copy-make.

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

impl Board {
    /// Play `mv` on a copy of this board and return the copy together with
    /// whatever piece stood on the destination. `self` is not modified.
    ///
    /// No legality checks are made beyond the source square holding a piece.
    /// A pawn that reaches its last row is replaced by a queen of its color.
    ///
    /// # Errors
    ///
    /// [`BoardError::EmptySource`] if there is no piece on the source square.
    pub fn make_move(&self, mv: Move) -> Result<(Board, Option<Piece>), BoardError> {
        let src = mv.source();
        let dst = mv.dest();
        let moving = self
            .piece_at(src)
            .ok_or(BoardError::EmptySource { square: src })?;

        let mut next = *self;
        next.remove_piece(src);

        let placed = if moving.kind() == PieceKind::Pawn && dst.row() == moving.color().promotion_row() {
            trace!(%mv, color = %moving.color(), "pawn promoted to queen");
            Piece::new(PieceKind::Queen, moving.color())
        } else {
            moving
        };
        let captured = next.set_piece(dst, placed);

        Ok((next, captured))
    }

    /// [`make_move`](Board::make_move) addressed by algebraic square names.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidSquare`] if either name is malformed, or
    /// [`BoardError::EmptySource`] if the source square is empty.
    pub fn move_piece(&self, source: &str, destination: &str) -> Result<(Board, Option<Piece>), BoardError> {
        let mv = Move::from_names(source, destination)?;
        self.make_move(mv)
    }
}
