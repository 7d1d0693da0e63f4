//! Error types for FFBot Core

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why two player names could not be turned into a recommendation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChooserError {
    /// Utterance has no " or " / " and " between two names
    #[error("No ' or ' / ' and ' separator between two names in {0:?}")]
    NoSeparatorFound(String),

    /// Both names parsed, but no single ranking pool holds them both
    #[error("Players not found in any ranking pool: {first:?}, {second:?}")]
    PlayerNotFound { first: String, second: String },
}

/// Fork-stage text that matches none of the menu tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized menu choice: {0:?}")]
pub struct UnrecognizedMenuChoice(pub String);
