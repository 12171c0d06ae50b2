//! Move legality for kingsafe: simulate-and-check move validation and perft.

mod diagnose;
pub mod error;
pub mod perft;
pub mod validator;

pub use error::{GeometryError, IllegalMove};
pub use perft::{divide, perft};
pub use validator::{MoveSets, MoveValidator, generate_valid_moves, has_legal_moves, is_valid_move, validate};
