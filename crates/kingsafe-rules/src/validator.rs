//! Legal move generation by simulation, and single-move validation.
//!
//! Every pseudo-legal move is played on a copy of the board; if the mover's
//! king is attacked afterwards the move is a self-check move, otherwise it is
//! legal. Pins, moving into check and failing to escape check are all
//! handled by this one sweep. Nothing is cached between calls.

use tracing::{debug, trace};

use kingsafe_core::{Board, Color, Move, Square, is_in_check, pseudo_legal_moves};

use crate::diagnose::diagnose;
use crate::error::IllegalMove;

/// The pseudo-legal moves of one color, split by whether they are legal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSets {
    /// Moves that leave the mover's king safe.
    pub legal: Vec<Move>,
    /// Moves that fit the piece's geometry but leave the mover's king attacked.
    pub self_check: Vec<Move>,
}

impl MoveSets {
    /// Return `true` if `mv` is legal.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal.contains(&mv)
    }

    /// Return `true` if `mv` is rejected only because it exposes the king.
    pub fn is_self_check(&self, mv: Move) -> bool {
        self.self_check.contains(&mv)
    }

    /// Legal moves rendered as `"E2 E4"` strings.
    pub fn legal_strings(&self) -> Vec<String> {
        self.legal.iter().map(Move::to_string).collect()
    }

    /// Self-check moves rendered as `"E2 E4"` strings.
    pub fn self_check_strings(&self) -> Vec<String> {
        self.self_check.iter().map(Move::to_string).collect()
    }
}

/// Classify every pseudo-legal move of `color` on `board`.
///
/// Moves are listed by source square (A1 to H8), then in each piece's
/// generation order.
pub fn generate_valid_moves(board: &Board, color: Color) -> MoveSets {
    let mut sets = MoveSets::default();

    for (from, _) in board.pieces(color) {
        for to in pseudo_legal_moves(board, from) {
            let mv = Move::new(from, to);
            let Ok((next, _)) = board.make_move(mv) else {
                continue;
            };
            if is_in_check(color, &next) {
                sets.self_check.push(mv);
            } else {
                sets.legal.push(mv);
            }
        }
    }

    trace!(
        %color,
        legal = sets.legal.len(),
        self_check = sets.self_check.len(),
        "generated moves"
    );
    sets
}

/// Return `true` if `color` has at least one legal move.
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|(from, _)| {
        pseudo_legal_moves(board, from).into_iter().any(|to| {
            board
                .make_move(Move::new(from, to))
                .is_ok_and(|(next, _)| !is_in_check(color, &next))
        })
    })
}

/// Check whether `mover` may play `source` to `destination`.
///
/// # Errors
///
/// The first applicable [`IllegalMove`] reason: bad square names, then
/// self-check, then (for moves that are not even pseudo-legal) empty source,
/// wrong owner, same square, own-piece capture and finally the geometric
/// reason.
pub fn is_valid_move(board: &Board, source: &str, destination: &str, mover: Color) -> Result<(), IllegalMove> {
    let (Some(src), Some(dst)) = (Square::from_algebraic(source), Square::from_algebraic(destination)) else {
        debug!(source, destination, "rejected malformed square");
        return Err(IllegalMove::InvalidFormat);
    };
    validate(board, Move::new(src, dst), mover)
}

/// [`is_valid_move`] for an already parsed move.
///
/// # Errors
///
/// See [`is_valid_move`].
pub fn validate(board: &Board, mv: Move, mover: Color) -> Result<(), IllegalMove> {
    let sets = generate_valid_moves(board, mover);
    if sets.is_legal(mv) {
        return Ok(());
    }

    let reason = if sets.is_self_check(mv) {
        IllegalMove::SelfCheck
    } else {
        explain(board, mv, mover)
    };
    debug!(%mv, %mover, %reason, "rejected move");
    Err(reason)
}

fn explain(board: &Board, mv: Move, mover: Color) -> IllegalMove {
    let Some(piece) = board.piece_at(mv.source()) else {
        return IllegalMove::NoPiece;
    };
    if piece.color() != mover {
        return IllegalMove::NotYourPiece;
    }
    if mv.source() == mv.dest() {
        return IllegalMove::SameSquare;
    }
    if board.piece_at(mv.dest()).is_some_and(|target| target.color() == mover) {
        return IllegalMove::OwnPiece;
    }
    IllegalMove::Geometry(diagnose(board, mv, piece))
}

/// Borrowing front end over one board, for callers that ask several
/// questions about the same position.
#[derive(Debug, Clone, Copy)]
pub struct MoveValidator<'a> {
    board: &'a Board,
}

impl<'a> MoveValidator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// See [`generate_valid_moves`].
    pub fn generate_valid_moves(&self, color: Color) -> MoveSets {
        generate_valid_moves(self.board, color)
    }

    /// See [`is_valid_move`].
    pub fn is_valid_move(&self, source: &str, destination: &str, mover: Color) -> Result<(), IllegalMove> {
        is_valid_move(self.board, source, destination, mover)
    }

    /// Return `true` if the king of `color` is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(color, self.board)
    }
}
