//! # Pizzeria Error Types
//!
//! Typed error handling for the pizzeria console.
//! Everything that can end a session returns `Result<T, PizzeriaError>`;
//! bad menu choices never become errors, they are answered with a reprompt.

use thiserror::Error;

/// Core error type for the ordering flow
#[derive(Debug, Error)]
pub enum PizzeriaError {
    /// Console or journal file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input was closed while a prompt was waiting for an answer
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Custom pizza base price could not be parsed or is out of range
    #[error("Invalid price: {input:?}")]
    InvalidPrice { input: String },

    /// Menu catalog could not be loaded
    #[error("Menu error: {0}")]
    Menu(String),

    /// Order record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for PizzeriaError {
    fn from(err: toml::de::Error) -> Self {
        PizzeriaError::Menu(err.to_string())
    }
}

/// Result type alias for pizzeria operations
pub type PizzeriaResult<T> = Result<T, PizzeriaError>;
