//! Random text: uuid, random_string, secure_random_hex

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use std::fmt::Write as _;
use uuid::Uuid;
use wordsmith_plugin::prelude::*;
use crate::helpers::bool_or;
use crate::TextError;

/// Random v4 UUID, dashed or as 32 hex digits
pub fn uuid(as_hex: bool) -> String {
    let id = Uuid::new_v4();
    if as_hex {
        id.simple().to_string()
    } else {
        id.to_string()
    }
}

/// `size` random ASCII letters and digits
pub fn random_string(size: i64) -> Result<String, TextError> {
    let size = usize::try_from(size)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| TextError::InvalidArgument("size must be >= 1".to_string()))?;

    Ok(rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect())
}

/// Largest `byte_count` accepted by [`secure_random_hex`]
pub const MAX_RANDOM_BYTES: usize = 1 << 20;

/// `byte_count` bytes from the operating system RNG, hex encoded
pub fn secure_random_hex(byte_count: i64) -> Result<String, TextError> {
    let count = usize::try_from(byte_count)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| TextError::InvalidArgument("byte_count must be >= 1".to_string()))?;
    if count > MAX_RANDOM_BYTES {
        return Err(TextError::InvalidArgument(format!(
            "byte_count must be <= {}",
            MAX_RANDOM_BYTES
        )));
    }

    let mut bytes = vec![0u8; count];
    OsRng.fill_bytes(&mut bytes);

    let mut out = String::with_capacity(count * 2);
    for b in bytes {
        let _ = write!(out, "{:02x}", b);
    }
    Ok(out)
}

/// Size argument; anything but an integer gets the function's own message
fn size_arg(args: &[Value], err: impl Fn() -> TextError) -> Result<i64, WordsmithError> {
    match args.first() {
        Some(Value::Number(n)) => n.to_i64().ok_or_else(|| err().into()),
        Some(Value::Error(e)) => Err(e.clone()),
        _ => Err(err().into()),
    }
}

// ============ Uuid ============

pub struct UuidFn;

static UUID_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("as_hex", "Bool", "32 hex digits without dashes", "false"),
];

static UUID_EXAMPLES: [&str; 2] = [
    "uuid() → \"97e3a716-6b33-4ab9-9bb1-8128cb24d76b\"",
    "uuid(true) → \"97e3a7166b334ab99bb18128cb24d76b\"",
];

static UUID_RELATED: [&str; 1] = ["is_uuid"];

impl FunctionPlugin for UuidFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "uuid",
            description: "Generate a random UUID (version 4)",
            usage: "uuid([as_hex])",
            args: &UUID_ARGS,
            returns: "Text",
            examples: &UUID_EXAMPLES,
            category: "text/generate",
            related: &UUID_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match bool_or(args, 0, false, "uuid", "as_hex") {
            Ok(as_hex) => Value::Text(uuid(as_hex)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ RandomString ============

pub struct RandomString;

static RANDOM_STRING_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("size", "Number", "Length of the string, at least 1"),
];

static RANDOM_STRING_EXAMPLES: [&str; 1] = ["random_string(9) → \"cx3QQbzYg\""];

static RANDOM_STRING_RELATED: [&str; 2] = ["secure_random_hex", "shuffle"];

impl FunctionPlugin for RandomString {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "random_string",
            description: "Generate random ASCII letters and digits",
            usage: "random_string(size)",
            args: &RANDOM_STRING_ARGS,
            returns: "Text",
            examples: &RANDOM_STRING_EXAMPLES,
            category: "text/generate",
            related: &RANDOM_STRING_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let size_error = || TextError::InvalidArgument("size must be >= 1".to_string());
        let result = size_arg(args, size_error)
            .and_then(|size| random_string(size).map_err(WordsmithError::from));
        match result {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(e.in_function("random_string")),
        }
    }
}

// ============ SecureRandomHex ============

pub struct SecureRandomHex;

static SECURE_RANDOM_HEX_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("byte_count", "Number", "Random bytes to draw, 1 to 1048576"),
];

static SECURE_RANDOM_HEX_EXAMPLES: [&str; 1] = [
    "secure_random_hex(9) → \"aac4cf1d1d87bd5036\"",
];

static SECURE_RANDOM_HEX_RELATED: [&str; 1] = ["random_string"];

impl FunctionPlugin for SecureRandomHex {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "secure_random_hex",
            description: "Hex encode random bytes from the operating system; output is twice byte_count long",
            usage: "secure_random_hex(byte_count)",
            args: &SECURE_RANDOM_HEX_ARGS,
            returns: "Text",
            examples: &SECURE_RANDOM_HEX_EXAMPLES,
            category: "text/generate",
            related: &SECURE_RANDOM_HEX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let count_error = || TextError::InvalidArgument("byte_count must be >= 1".to_string());
        let result = size_arg(args, count_error)
            .and_then(|count| secure_random_hex(count).map_err(WordsmithError::from));
        match result {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(e.in_function("secure_random_hex")),
        }
    }
}
