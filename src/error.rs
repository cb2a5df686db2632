//! Error types for mdshift operations.
//!
//! The conversion engine itself is total: any input string produces an
//! output string, and malformed markdown simply passes through untouched.
//! These errors exist for the surfaces around the engine: strict platform
//! parsing, file I/O, and session persistence.

use thiserror::Error;

/// Errors that can occur outside the conversion engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("session file error: {0}")]
    Session(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
