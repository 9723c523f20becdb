//! Structured errors
//!
//! Errors never crash the caller. They are values that travel inside
//! `Value::Error` and carry a machine-readable code plus a human-readable
//! message.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Call completed with a degraded result
    Warning,
    /// Call failed
    Error,
    /// Library state is broken (a bug)
    Fatal,
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Function that raised the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Argument that violated the contract
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

/// Structured error returned by every function plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsmithError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    /// Severity level
    pub severity: Severity,
}

impl WordsmithError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set function context
    pub fn in_function(mut self, function: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.function = Some(function.into());
        self
    }

    /// Builder: set argument context
    pub fn for_argument(mut self, argument: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.argument = Some(argument.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
    }

    /// The value handed to a text function is not text at all
    pub fn invalid_input(received: &str) -> Self {
        Self::new(codes::INVALID_INPUT, format!("Expected \"Text\", received \"{}\"", received))
            .with_suggestion("Pass a text value")
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
            .with_suggestion("Use help() to list available functions")
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got))
            .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got))
            .in_function(func)
            .for_argument(arg)
    }

    /// Value has the right type but lies outside the accepted domain
    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, details.into())
    }

    /// A combination of arguments cannot produce a valid result
    pub fn overflow(details: impl Into<String>) -> Self {
        Self::new(codes::OVERFLOW, details.into())
    }

    /// An unrecognized symbol was found while decoding
    pub fn invalid_token(token: char) -> Self {
        Self::new(codes::INVALID_TOKEN, format!("Invalid token found: \"{}\"", token))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for WordsmithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for WordsmithError {}

impl From<NumberError> for WordsmithError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(s),
            NumberError::NotAnInteger(s) => Self::domain_error(format!("{} is not an integer", s)),
            NumberError::Overflow => Self::overflow("Numeric overflow"),
        }
    }
}
