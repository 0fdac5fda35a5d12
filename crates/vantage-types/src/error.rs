//! Library error type and `Result` alias.
//!
//! Navigation failures reported by the engine are data, not errors: the
//! screen turns them into alerts. This type covers everything that stops
//! a screen from being built or configured.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VantageError {
    /// Settings parsed but are not usable.
    #[error("config error: {0}")]
    Config(String),

    /// A navigation failure surfaced outside the alert path.
    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, VantageError>;
