//! Error types for the CLI application.

use std::fmt;

use pokerbots_ai::UnknownPolicy;
use pokerbots_engine::errors::GameError;

use crate::config::ConfigError;
use crate::exit_code;

/// Everything a command can fail with, propagated with `?` up to [`crate::run`].
#[derive(Debug)]
pub enum CliError {
    /// I/O error (hand history file, stdout/stderr writes)
    Io(std::io::Error),

    /// Invalid command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// The engine aborted a round
    Engine(GameError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        exit_code::ERROR
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<UnknownPolicy> for CliError {
    fn from(error: UnknownPolicy) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}
