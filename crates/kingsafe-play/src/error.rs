//! Game session errors.

/// Errors that can occur while running a game session.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// A line of input is neither a command nor a two-square move.
    #[error("Invalid move format. Use format like: E2 E4")]
    InvalidMoveFormat {
        /// The rejected input line.
        input: String,
    },

    /// A command-line flag is not recognized.
    #[error("unknown option: {flag}")]
    UnknownFlag {
        /// The rejected flag.
        flag: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
