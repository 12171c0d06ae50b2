//! Console input parsing.

use crate::error::PlayError;

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A move given as two square names, uppercased but not yet validated.
    Move {
        /// Source square name, e.g. `"E2"`.
        source: String,
        /// Destination square name, e.g. `"E4"`.
        destination: String,
    },
    /// `board` -- print the current board.
    Board,
    /// `moves` -- list the legal moves of the player to move.
    Moves,
    /// `help` -- print the accepted input formats.
    Help,
    /// `quit` or `exit` -- leave the game.
    Quit,
}

/// Parse a single line of console input into a [`Command`].
///
/// Moves may be written `E2 E4`, `E2-E4`, `E2,E4` or `E2, E4`, in any case.
/// Square names are only split and uppercased here; whether they name real
/// squares is left to move validation.
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let trimmed = line.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(Command::Quit),
        "board" => return Ok(Command::Board),
        "moves" => return Ok(Command::Moves),
        "help" => return Ok(Command::Help),
        _ => {}
    }

    parse_move(trimmed).ok_or_else(|| PlayError::InvalidMoveFormat {
        input: trimmed.to_string(),
    })
}

/// Split a move into its two square names.
///
/// The first separator present wins, in the order `", "`, `","`, `"-"`,
/// whitespace.
fn parse_move(input: &str) -> Option<Command> {
    let parts: Vec<&str> = if input.contains(", ") {
        input.split(", ").collect()
    } else if input.contains(',') {
        input.split(',').collect()
    } else if input.contains('-') {
        input.split('-').collect()
    } else if input.contains(char::is_whitespace) {
        input.split_whitespace().collect()
    } else {
        return None;
    };

    let [source, destination] = parts.as_slice() else {
        return None;
    };

    Some(Command::Move {
        source: source.trim().to_ascii_uppercase(),
        destination: destination.trim().to_ascii_uppercase(),
    })
}
