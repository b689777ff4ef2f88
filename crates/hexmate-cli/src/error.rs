//! Text session errors.

use hexmate_core::{BoardError, CoordError, MoveError};

/// Errors that can occur while reading and executing session commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The first word is not a known command.
    #[error("unknown command: {name} (try \"help\")")]
    UnknownCommand {
        /// The word as typed.
        name: String,
    },

    /// A known command with missing or surplus arguments.
    #[error("malformed {command} command, usage: {usage}")]
    MalformedCommand {
        /// The command name.
        command: &'static str,
        /// The expected argument shape.
        usage: &'static str,
    },

    /// A coordinate argument is not three comma-separated integers.
    #[error("malformed coordinate: {text} (expected q,r,s)")]
    MalformedCoordinate {
        /// The argument as typed.
        text: String,
    },

    /// A radius argument is not an integer.
    #[error("invalid radius: {value}")]
    InvalidRadius {
        /// The argument as typed.
        value: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The value as typed.
        value: String,
    },

    /// A coordinate triple that breaks `q + r + s == 0`.
    #[error(transparent)]
    Coord(#[from] CoordError),

    /// The board rejected a move or promotion.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The board rejected a setup parameter.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
