//! Error types for storefront-tui
//!
//! Provides TUI-specific error types that wrap catalog errors
//! and terminal/IO errors for unified error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Catalog layer error (configuration, source construction)
    #[error("Catalog error: {0}")]
    Catalog(#[from] libstorefront::StorefrontError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TuiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Catalog(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
