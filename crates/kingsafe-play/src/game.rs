//! The turn loop of a two-player console game.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use kingsafe_core::{Board, Color, Move, Piece, PieceKind};
use kingsafe_rules::{IllegalMove, generate_valid_moves, validate};

use crate::command::{Command, parse_command};
use crate::config::PlayConfig;
use crate::error::PlayError;
use crate::status::{GameStatus, Outcome, title};

const BANNER: &str = "\
Welcome to Chess!
Enter moves like: E2 (initial position) E4 (source destination)
The game ends when a king is captured.
White = Uppercase letters, Black = Lowercase letters.
White plays first.
";

const HELP: &str = "\
Moves: E2 E4, E2-E4, E2,E4 or E2, E4 (any case)
Commands: board, moves, help, quit";

/// A game between two players sharing one console.
///
/// The game owns the only live board; each committed move replaces it with
/// the board returned by move execution.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Color,
    game_over: bool,
    outcome: Option<Outcome>,
    config: PlayConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game from the starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(PlayConfig::default())
    }

    pub fn with_config(config: PlayConfig) -> Self {
        Self::from_position(Board::starting_position(), Color::White, config)
    }

    /// Create a game from an arbitrary position.
    pub fn from_position(board: Board, to_move: Color, config: PlayConfig) -> Self {
        Self {
            board,
            current: to_move,
            game_over: false,
            outcome: None,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    /// How the game ended, if it ended with a result.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Return `true` once the game has a result or a player quit.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Classify the current position for the player to move.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board, self.current)
    }

    /// Validate and commit a move for the player to move.
    ///
    /// On success the captured piece (if any) is returned and the turn passes,
    /// unless the capture took a king, which ends the game. On failure nothing
    /// changes and the same player is still to move.
    ///
    /// # Errors
    ///
    /// The [`IllegalMove`] reason the move was rejected.
    pub fn play_move(&mut self, source: &str, destination: &str) -> Result<Option<Piece>, IllegalMove> {
        let mover = self.current;
        let mv = Move::from_names(source, destination)?;
        validate(&self.board, mv, mover)?;
        let (next, captured) = self.board.make_move(mv)?;

        self.board = next;
        debug!(%mv, %mover, ?captured, "move played");

        if captured.is_some_and(|piece| piece.kind() == PieceKind::King) {
            self.finish(Outcome::KingCaptured { winner: mover });
        } else {
            self.current = !mover;
        }
        Ok(captured)
    }

    /// Run the game, reading commands from `input` and writing to `output`.
    ///
    /// Returns when the game ends, a player quits, or `input` is exhausted.
    ///
    /// # Errors
    ///
    /// [`PlayError::Io`] if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<Option<Outcome>, PlayError> {
        info!(to_move = %self.current, "game started");
        writeln!(output, "{BANNER}")?;
        writeln!(output, "{}", self.board.pretty())?;

        let mut line = String::new();
        while !self.game_over {
            let status = self.status();
            if let Some(outcome) = self.terminal_outcome(status) {
                self.finish(outcome);
                writeln!(output, "\n{outcome}")?;
                break;
            }
            if status == GameStatus::Check && self.config.announce_check {
                writeln!(output, "\n{} is in check!", title(self.current))?;
            }

            write!(output, "\n{}'s move: ", title(self.current))?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("input closed");
                break;
            }

            match parse_command(&line) {
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e @ PlayError::InvalidMoveFormat { .. }) => {
                    debug!(error = %e, input = line.trim(), "unparseable input");
                    writeln!(output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }

        info!(outcome = ?self.outcome, "game finished");
        output.flush()?;
        Ok(self.outcome)
    }

    fn terminal_outcome(&self, status: GameStatus) -> Option<Outcome> {
        match status {
            GameStatus::Checkmate { winner } => Some(Outcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(Outcome::Stalemate {
                stalemated: self.current,
            }),
            GameStatus::Ongoing | GameStatus::Check => None,
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.game_over = true;
    }

    fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), PlayError> {
        match cmd {
            Command::Move { source, destination } => self.handle_move(&source, &destination, output)?,
            Command::Board => writeln!(output, "{}", self.board.pretty())?,
            Command::Moves => self.write_moves(output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => {
                info!(player = %self.current, "player quit");
                self.game_over = true;
            }
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, source: &str, destination: &str, output: &mut W) -> Result<(), PlayError> {
        let mover = self.current;
        let captured = match self.play_move(source, destination) {
            Ok(captured) => captured,
            Err(reason) => {
                writeln!(output, "Illegal move: {reason}")?;
                if self.config.list_moves_on_error {
                    self.write_moves(output)?;
                }
                return Ok(());
            }
        };

        if let Some(outcome) = self.outcome {
            writeln!(output, "{}", self.board.pretty())?;
            writeln!(output, "\n{outcome}")?;
            return Ok(());
        }

        if self.config.show_board {
            writeln!(output)?;
            writeln!(output, "{}", self.board.pretty())?;
        }
        if let Some(piece) = captured {
            writeln!(
                output,
                "\n{} captured {}'s {}!",
                title(mover),
                piece.color(),
                piece.kind()
            )?;
        }
        Ok(())
    }

    fn write_moves<W: Write>(&self, output: &mut W) -> Result<(), PlayError> {
        let moves = generate_valid_moves(&self.board, self.current).legal_strings();
        writeln!(output, "Legal moves: {}", moves.join(", "))?;
        Ok(())
    }
}
