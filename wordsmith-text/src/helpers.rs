//! Helper functions for text plugins
//!
//! Argument extraction with the text library's type contract: the subject of
//! every function must be `Text`, errors received as arguments propagate.

use wordsmith_core::{Value, WordsmithError};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use crate::TextError;

/// Extract the subject text, rejecting anything that is not `Text`
pub fn require_text<'a>(args: &'a [Value], func: &str) -> Result<&'a str, WordsmithError> {
    match args.first() {
        Some(Value::Text(s)) => Ok(s.as_str()),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(WordsmithError::from(TextError::invalid_input(other.type_name()))
            .in_function(func)),
        None => Err(WordsmithError::arg_count(func, 1, 0)),
    }
}

/// Extract the subject text for a predicate; non-text subjects are `None`
pub fn predicate_text(args: &[Value]) -> Result<Option<&str>, WordsmithError> {
    match args.first() {
        Some(Value::Text(s)) => Ok(Some(s.as_str())),
        Some(Value::Error(e)) => Err(e.clone()),
        _ => Ok(None),
    }
}

/// Extract optional text with default
pub fn text_or<'a>(args: &'a [Value], index: usize, default: &'a str, func: &str, arg: &str) -> Result<&'a str, WordsmithError> {
    match args.get(index) {
        Some(Value::Text(s)) => Ok(s.as_str()),
        Some(Value::Null) | None => Ok(default),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(WordsmithError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Extract optional boolean with default
pub fn bool_or(args: &[Value], index: usize, default: bool, func: &str, arg: &str) -> Result<bool, WordsmithError> {
    match args.get(index) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::Null) | None => Ok(default),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(WordsmithError::arg_type(func, arg, "Bool", other.type_name())),
    }
}

/// Regex cache for patterns built from a caller-supplied separator
static REGEX_CACHE: OnceLock<RwLock<HashMap<String, Regex>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, Regex>> {
    REGEX_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Get or compile a regex pattern with caching
pub fn get_regex(pattern: &str) -> Result<Regex, TextError> {
    let cache = get_cache();

    {
        if let Ok(read_guard) = cache.read() {
            if let Some(re) = read_guard.get(pattern) {
                return Ok(re.clone());
            }
        }
    }

    let re = Regex::new(pattern).map_err(|e| {
        TextError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    // A poisoned lock only costs the cache entry
    if let Ok(mut write_guard) = cache.write() {
        write_guard.insert(pattern.to_string(), re.clone());
    }

    Ok(re)
}
