//! Interactive two-player console chess.

pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod status;

pub use command::{Command, parse_command};
pub use config::PlayConfig;
pub use error::PlayError;
pub use game::Game;
pub use status::{GameStatus, Outcome};
