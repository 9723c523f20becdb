//! Compression to URL-safe text: compress, decompress
//!
//! zlib-deflated UTF-8 bytes, encoded as URL-safe base64 with padding.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};
use wordsmith_plugin::prelude::*;
use crate::helpers::require_text;
use crate::TextError;

pub const DEFAULT_LEVEL: i64 = 9;

fn level_error() -> TextError {
    TextError::InvalidArgument(
        "Invalid compression_level: it must be an \"int\" between 0 and 9".to_string(),
    )
}

fn require_non_empty(input: &str) -> Result<(), TextError> {
    if input.is_empty() {
        return Err(TextError::InvalidArgument("Input string cannot be empty".to_string()));
    }
    Ok(())
}

/// Compress non-empty text at `level` (0 = store, 9 = best)
pub fn compress(input: &str, level: i64) -> Result<String, TextError> {
    require_non_empty(input)?;
    let level = u32::try_from(level)
        .ok()
        .filter(|l| *l <= 9)
        .ok_or_else(level_error)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(input.as_bytes())
        .map_err(|e| TextError::Compression(e.to_string()))?;
    let bytes = encoder.finish().map_err(|e| TextError::Compression(e.to_string()))?;

    Ok(URL_SAFE.encode(bytes))
}

/// Restore text produced by [`compress`]
pub fn decompress(input: &str) -> Result<String, TextError> {
    require_non_empty(input)?;
    let bytes = URL_SAFE
        .decode(input)
        .map_err(|e| TextError::Decompression(format!("Invalid base64 payload: {}", e)))?;

    let mut decoder = ZlibDecoder::new(bytes.as_slice());
    let mut out = String::new();
    decoder
        .read_to_string(&mut out)
        .map_err(|e| TextError::Decompression(format!("Invalid zlib payload: {}", e)))?;
    Ok(out)
}

// ============ Compress ============

pub struct Compress;

static COMPRESS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Non-empty text to compress"),
    ArgMeta::optional("compression_level", "Number", "0 (none) to 9 (best)", "9"),
];

static COMPRESS_EXAMPLES: [&str; 2] = [
    "compress(\"a long text...\") → \"eNpLVMjJz0tXKE...\"",
    "compress(\"\") → #ERROR",
];

static COMPRESS_RELATED: [&str; 1] = ["decompress"];

impl FunctionPlugin for Compress {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "compress",
            description: "Compress text into a URL-safe string",
            usage: "compress(text, [compression_level])",
            args: &COMPRESS_ARGS,
            returns: "Text",
            examples: &COMPRESS_EXAMPLES,
            category: "text/compress",
            related: &COMPRESS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match require_text(args, "compress") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        let level = match args.get(1) {
            None | Some(Value::Null) => Ok(DEFAULT_LEVEL),
            Some(Value::Number(n)) => n.to_i64().ok_or_else(level_error),
            Some(Value::Error(e)) => return Value::Error(e.clone()),
            Some(_) => Err(level_error()),
        };

        match level.and_then(|l| compress(text, l)) {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(WordsmithError::from(e).in_function("compress")),
        }
    }
}

// ============ Decompress ============

pub struct Decompress;

static DECOMPRESS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("text", "Text", "Output of compress()"),
];

static DECOMPRESS_EXAMPLES: [&str; 1] = [
    "decompress(compress(\"hello\")) → \"hello\"",
];

static DECOMPRESS_RELATED: [&str; 1] = ["compress"];

impl FunctionPlugin for Decompress {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "decompress",
            description: "Restore text compressed with compress()",
            usage: "decompress(text)",
            args: &DECOMPRESS_ARGS,
            returns: "Text",
            examples: &DECOMPRESS_EXAMPLES,
            category: "text/compress",
            related: &DECOMPRESS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match require_text(args, "decompress") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match decompress(text) {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(WordsmithError::from(e).in_function("decompress")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_ctx() -> EvalContext {
        EvalContext::new(std::sync::Arc::new(PluginRegistry::new()))
    }

    fn long_text() -> String {
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Città, perché così? ".repeat(20)
    }

    #[test]
    fn test_compress_shrinks_and_is_url_safe() {
        let text = long_text();
        let compressed = compress(&text, DEFAULT_LEVEL).unwrap();
        assert!(compressed.len() < text.len());
        assert!(!compressed.contains(' '));
        assert!(!compressed.contains('+'));
        assert!(!compressed.contains('/'));
    }

    #[test]
    fn test_decompress_restores() {
        let text = long_text();
        for level in 0..=9 {
            let compressed = compress(&text, level).unwrap();
            assert_ne!(compressed, text);
            assert_eq!(decompress(&compressed).unwrap(), text);
        }
    }

    #[test]
    fn test_invalid_level() {
        for level in [-1, 10] {
            assert_eq!(
                compress("A string to compress", level).unwrap_err().to_string(),
                "Invalid compression_level: it must be an \"int\" between 0 and 9"
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compress("", 9).unwrap_err().to_string(), "Input string cannot be empty");
        assert_eq!(decompress("").unwrap_err().to_string(), "Input string cannot be empty");
    }

    #[test]
    fn test_corrupt_payload() {
        assert!(matches!(decompress("not base64!!"), Err(TextError::Decompression(_))));
        let not_zlib = URL_SAFE.encode(b"plain bytes");
        assert!(matches!(decompress(&not_zlib), Err(TextError::Decompression(_))));
    }

    #[test]
    fn test_plugins() {
        let ctx = eval_ctx();
        let compressed = Compress.call(&[Value::from("hello hello hello")], &ctx);
        let restored = Decompress.call(&[compressed], &ctx);
        assert_eq!(restored.as_text(), Some("hello hello hello"));

        let result = Compress.call(
            &[Value::from("x"), Value::Number(Number::from_str("5.5").unwrap())],
            &ctx,
        );
        assert_eq!(result.as_error().unwrap().code, codes::DOMAIN_ERROR);

        let result = Decompress.call(&[Value::from("####")], &ctx);
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
        assert!(err.suggestion.is_some());

        let result = Compress.call(&[Value::Null], &ctx);
        assert_eq!(result.as_error().unwrap().code, codes::INVALID_INPUT);
    }
}
