//! # CLI Error Type
//!
//! Unified error type for the ordering session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bistro                                 │
//! │                                                                         │
//! │  Invalid answer ──────────► ValidationError ──► shown, question re-asked│
//! │                                                                         │
//! │  stdin closed ────────────► CliError::InputClosed ──► session ends      │
//! │  terminal write fails ────► CliError::Io          ──► exit status 1     │
//! │  bad menu / env value ────► CliError::Config      ──► exit status 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use bistro_core::CoreError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input source reached end of file mid-session.
    #[error("Input closed before the session finished")]
    InputClosed,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type CliResult<T> = Result<T, CliError>;
