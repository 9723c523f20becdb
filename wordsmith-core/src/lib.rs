//! Wordsmith Core - Fundamental types
//!
//! This crate provides the core types used throughout Wordsmith:
//! - `Number`: Arbitrary precision numeric arguments
//! - `Value`: Runtime values (text, numbers, lists, errors)
//! - `WordsmithError`: Structured errors with stable codes

mod number;
mod value;
mod error;

pub use number::{Number, NumberError};
pub use value::Value;
pub use error::{WordsmithError, ErrorContext, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, Value, WordsmithError, Severity};
    pub use crate::error::codes;
}
