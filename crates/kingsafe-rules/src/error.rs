//! Reasons a requested move is refused.

use kingsafe_core::{BoardError, PieceKind, SquareParseError};

/// Why a move is not legal for the side requesting it.
///
/// The `Display` text of each variant is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// A square name failed to parse.
    #[error("Invalid position format")]
    InvalidFormat,
    /// The source square is empty.
    #[error("No piece at source position")]
    NoPiece,
    /// The source square holds an opponent's piece.
    #[error("That's not your piece")]
    NotYourPiece,
    #[error("Source and destination are the same")]
    SameSquare,
    /// The destination holds one of the mover's own pieces.
    #[error("Cannot capture your own piece")]
    OwnPiece,
    /// The move fits the piece's geometry but leaves the mover's king attacked.
    #[error("Can't put your king in jeopardy")]
    SelfCheck,
    /// The piece cannot reach the destination.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Why a piece's movement pattern does not allow a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("Pawn cannot capture forward")]
    PawnCaptureForward,
    #[error("Pawn can only move diagonally to capture")]
    PawnDiagonalWithoutCapture,
    #[error("Invalid pawn move")]
    InvalidPawnMove,
    #[error("Rook must move horizontally or vertically")]
    RookShape,
    #[error("Invalid knight move (must be L-shaped)")]
    KnightShape,
    #[error("Bishop must move diagonally")]
    BishopShape,
    #[error("Queen must move horizontally, vertically, or diagonally")]
    QueenShape,
    #[error("King can only move one square")]
    KingShape,
    /// A piece stands between source and destination.
    #[error("Path is blocked")]
    PathBlocked,
    /// The shape is right but the move is still unavailable.
    #[error("Illegal move for {kind}")]
    Unreachable {
        /// Kind of the piece that was asked to move.
        kind: PieceKind,
    },
}

impl From<SquareParseError> for IllegalMove {
    fn from(_: SquareParseError) -> Self {
        IllegalMove::InvalidFormat
    }
}

/// Move execution failures in player terms.
impl From<BoardError> for IllegalMove {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidSquare { .. } => IllegalMove::InvalidFormat,
            BoardError::EmptySource { .. } => IllegalMove::NoPiece,
        }
    }
}
