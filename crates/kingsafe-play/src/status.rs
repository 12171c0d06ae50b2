//! Position classification and game outcomes.

use std::fmt;

use kingsafe_core::{Board, Color, is_in_check};
use kingsafe_rules::has_legal_moves;

/// The state of a position for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Legal moves exist and the king is not attacked.
    Ongoing,
    /// Legal moves exist but the king is attacked.
    Check,
    /// No legal moves and the king is attacked.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// No legal moves and the king is not attacked.
    Stalemate,
}

impl GameStatus {
    /// Classify `board` with `to_move` to play.
    pub fn of(board: &Board, to_move: Color) -> GameStatus {
        let check = is_in_check(to_move, board);
        match (check, has_legal_moves(board, to_move)) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate { winner: !to_move },
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Return `true` if the game cannot continue.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The loser had no legal moves while in check.
    Checkmate { winner: Color },
    /// The side to move had no legal moves and was not in check.
    Stalemate { stalemated: Color },
    /// A king was taken off the board.
    KingCaptured { winner: Color },
}

impl Outcome {
    /// The winning side, or `None` for a draw.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::KingCaptured { winner } => Some(winner),
            Outcome::Stalemate { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Checkmate { winner } => {
                write!(f, "{} won with check mate!", title(winner))
            }
            Outcome::Stalemate { stalemated } => {
                write!(f, "{} has no legal moves, game ends in a draw!", title(stalemated))
            }
            Outcome::KingCaptured { winner } => write!(
                f,
                "{} wins! {} king has been captured!",
                title(winner),
                title(!winner)
            ),
        }
    }
}

/// Color name with a leading capital, for console messages.
pub(crate) fn title(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Color::White, GameStatus::Ongoing; "start")]
    #[test_case("4k3/8/8/8/8/8/8/4R2K", Color::Black, GameStatus::Check; "rook check")]
    #[test_case("3R2k1/5ppp/8/8/8/8/8/6K1", Color::Black, GameStatus::Checkmate { winner: Color::White }; "back rank mate")]
    #[test_case("k7/2K5/1Q6/8/8/8/8/8", Color::Black, GameStatus::Stalemate; "stalemate")]
    fn classify(placement: &str, to_move: Color, expected: GameStatus) {
        let board: Board = placement.parse().unwrap();
        assert_eq!(GameStatus::of(&board, to_move), expected);
    }

    #[test]
    fn terminal_states() {
        assert!(!GameStatus::Ongoing.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Checkmate { winner: Color::Black }.is_terminal());
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            Outcome::Checkmate { winner: Color::Black }.to_string(),
            "Black won with check mate!"
        );
        assert_eq!(
            Outcome::Stalemate { stalemated: Color::White }.to_string(),
            "White has no legal moves, game ends in a draw!"
        );
        assert_eq!(
            Outcome::KingCaptured { winner: Color::White }.to_string(),
            "White wins! Black king has been captured!"
        );
        assert_eq!(Outcome::Stalemate { stalemated: Color::Black }.winner(), None);
    }
}
