//! Error types for samvad-tui
//!
//! Wraps core library errors and terminal/IO errors for unified handling
//! in the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error
    #[error("Forum error: {0}")]
    Forum(#[from] libsamvad::SamvadError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
