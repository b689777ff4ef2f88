//! Text front-end for hexmate: command parsing and an interactive session.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command, parse_coord};
pub use error::CliError;
pub use session::{Session, SessionConfig};
