//! Error types for the dice roller front end

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit code for a successful roll
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit code for missing or invalid arguments
pub const EXIT_USAGE: u8 = 1;

/// Process exit code for a library, symbol, computation or output failure
pub const EXIT_RUNTIME: u8 = 2;

/// Main error type for a roll invocation
#[derive(Debug, Error)]
pub enum RollError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("dlopen() failed for {}: {message}", path.display())]
    Load {
        path: PathBuf,
        message: String,
    },

    #[error("dlsym() failed for `{symbol}` in {}: {message}", path.display())]
    Symbol {
        path: PathBuf,
        symbol: String,
        message: String,
    },

    #[error("library returned 0 for {count}d{sides}!")]
    Computation {
        count: u8,
        sides: u8,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: String,
    },

    #[error("failed to write result: {0}")]
    Output(#[from] io::Error),
}

/// Rejected command-line input
#[derive(Debug, Error)]
pub enum UsageError {
    #[error(transparent)]
    Arguments(#[from] clap::Error),

    #[error("COUNT must be between 1 and 255!")]
    CountOutOfRange { value: i64 },

    #[error("SIDES must be between 2 and 255!")]
    SidesOutOfRange { value: i64 },
}

impl RollError {
    /// Exit code the process should terminate with for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            RollError::Usage(_) => EXIT_USAGE,
            RollError::Load { .. }
            | RollError::Symbol { .. }
            | RollError::Computation { .. }
            | RollError::Configuration { .. }
            | RollError::Output(_) => EXIT_RUNTIME,
        }
    }
}

/// Type alias for the main result type used throughout the crate
pub type RollResult<T> = Result<T, RollError>;
