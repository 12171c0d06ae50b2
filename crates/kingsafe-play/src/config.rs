//! Session options.

use tracing::debug;

use crate::error::PlayError;

/// Options that shape what the session prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    /// Print the board after every committed move.
    pub show_board: bool,
    /// Print a warning when the player to move is in check.
    pub announce_check: bool,
    /// Print the legal moves after an illegal attempt.
    pub list_moves_on_error: bool,
    /// Raise the log level to `DEBUG`.
    pub verbose: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            announce_check: true,
            list_moves_on_error: false,
            verbose: false,
        }
    }
}

impl PlayConfig {
    /// Build a config from command-line flags (program name excluded).
    ///
    /// Recognized flags: `--quiet`, `--hints`, `--verbose`.
    ///
    /// # Errors
    ///
    /// [`PlayError::UnknownFlag`] for anything else.
    pub fn from_args<I, S>(args: I) -> Result<Self, PlayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--quiet" => config.show_board = false,
                "--hints" => config.list_moves_on_error = true,
                "--verbose" => config.verbose = true,
                other => {
                    return Err(PlayError::UnknownFlag {
                        flag: other.to_string(),
                    });
                }
            }
        }
        debug!(?config, "parsed options");
        Ok(config)
    }
}
