//! Core chess rules: squares, pieces, the board, move geometry and check detection.

mod board;
mod chess_move;
mod color;
mod error;
mod make_move;
mod piece;
mod piece_kind;
mod placement;
mod square;

pub mod check;
pub mod codec;
pub mod movegen;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use check::{find_king, is_in_check};
pub use color::Color;
pub use error::{BoardError, ColorParseError, PlacementError, SquareParseError};
pub use movegen::pseudo_legal_moves;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use square::Square;
