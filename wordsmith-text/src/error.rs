//! Typed errors for the text functions
//!
//! The typed Rust API returns `TextError`. Plugins convert it into the
//! structured [`WordsmithError`] carried by `Value::Error`.

use thiserror::Error;
use wordsmith_core::WordsmithError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The argument is not text
    #[error("Expected \"Text\", received \"{received}\"")]
    InvalidInput { received: String },

    /// A value lies outside its accepted bounds
    #[error("{0}")]
    OutOfRange(String),

    #[error("Invalid input, only strings or integers are allowed")]
    NotAnInteger,

    #[error("Input must be a non empty string")]
    EmptyInput,

    /// An option value is unknown or malformed
    #[error("{0}")]
    InvalidArgument(String),

    /// start/stop/step cannot produce a walk
    #[error("Invalid start/stop/step configuration")]
    Infeasible,

    #[error("Invalid token found: \"{0}\"")]
    InvalidToken(char),

    #[error("{0}")]
    Decompression(String),

    /// The encoder failed to write its output
    #[error("Compression failed: {0}")]
    Compression(String),
}

impl TextError {
    pub fn invalid_input(received: impl Into<String>) -> Self {
        TextError::InvalidInput { received: received.into() }
    }
}

impl From<TextError> for WordsmithError {
    fn from(err: TextError) -> Self {
        match err {
            TextError::InvalidInput { received } => WordsmithError::invalid_input(&received),
            TextError::InvalidToken(c) => WordsmithError::invalid_token(c),
            TextError::Infeasible => WordsmithError::overflow(err.to_string())
                .with_suggestion("step must move start towards stop without passing it"),
            TextError::Decompression(_) => WordsmithError::domain_error(err.to_string())
                .with_suggestion("Pass a string produced by compress()"),
            TextError::Compression(_) => WordsmithError::internal(err.to_string()),
            TextError::OutOfRange(_)
            | TextError::NotAnInteger
            | TextError::EmptyInput
            | TextError::InvalidArgument(_) => WordsmithError::domain_error(err.to_string()),
        }
    }
}
