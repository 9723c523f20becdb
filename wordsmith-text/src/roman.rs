//! Roman numeral codec for the closed range 1-3999
//!
//! Values are built tier by tier (units, tens, hundreds, thousands). Each tier
//! has a symbol for one unit and, except thousands, a symbol for five units.

use wordsmith_plugin::prelude::*;
use crate::helpers::require_text;
use crate::validate::{is_full_string, is_integer};
use crate::TextError;

/// Smallest encodable value
pub const MIN_VALUE: i64 = 1;
/// Largest encodable value; there is no symbol for 5000
pub const MAX_VALUE: i64 = 3999;

/// Symbols of one place-value tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub one: char,
    pub five: Option<char>,
}

/// Units, tens, hundreds, thousands
pub const TIERS: [Tier; 4] = [
    Tier { one: 'I', five: Some('V') },
    Tier { one: 'X', five: Some('L') },
    Tier { one: 'C', five: Some('D') },
    Tier { one: 'M', five: None },
];

fn push_repeated(out: &mut String, c: char, count: u32) {
    for _ in 0..count {
        out.push(c);
    }
}

fn encode_digit(out: &mut String, tier: usize, digit: u32) {
    let Tier { one, five } = TIERS[tier];
    match digit {
        0 => {}
        1..=3 => push_repeated(out, one, digit),
        4 => {
            out.push(one);
            out.extend(five);
        }
        5 => out.extend(five),
        6..=8 => {
            out.extend(five);
            push_repeated(out, one, digit - 5);
        }
        _ => {
            out.push(one);
            out.extend(TIERS.get(tier + 1).map(|t| t.one));
        }
    }
}

/// Encode an integer in [1, 3999]
pub fn encode(value: i64) -> Result<String, TextError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(TextError::OutOfRange(format!(
            "Input must be >= {} and <= {}",
            MIN_VALUE, MAX_VALUE
        )));
    }

    let mut digits = [0u32; 4];
    let mut rest = value;
    for digit in digits.iter_mut() {
        *digit = (rest % 10) as u32;
        rest /= 10;
    }

    let mut out = String::new();
    for tier in (0..TIERS.len()).rev() {
        encode_digit(&mut out, tier, digits[tier]);
    }
    Ok(out)
}

/// Encode an integer given as text ("42", "+7")
pub fn encode_str(input: &str) -> Result<String, TextError> {
    if !is_integer(input) {
        return Err(TextError::NotAnInteger);
    }
    let value = Number::from_str(input)
        .and_then(|n| n.require_i64())
        .map_err(|_| TextError::NotAnInteger)?;
    encode(value)
}

fn symbol_value(symbol: char) -> Option<i64> {
    let mut unit = 1;
    for tier in TIERS.iter() {
        if tier.one == symbol {
            return Some(unit);
        }
        if tier.five == Some(symbol) {
            return Some(unit * 5);
        }
        unit *= 10;
    }
    None
}

/// Decode a numeral, ignoring case
///
/// Symbols are read right to left: a symbol smaller than the one after it is
/// subtracted, otherwise added. The first unknown symbol in that scan order is
/// reported.
pub fn decode(input: &str) -> Result<i64, TextError> {
    if !is_full_string(input) {
        return Err(TextError::EmptyInput);
    }

    let mut total = 0;
    let mut last = 0;
    for symbol in input.to_uppercase().chars().rev() {
        let value = symbol_value(symbol).ok_or(TextError::InvalidToken(symbol))?;
        if value >= last {
            total += value;
        } else {
            total -= value;
        }
        last = value;
    }
    Ok(total)
}

/// Rewrite a numeral in canonical uppercase form ("iiii" → "IV")
pub fn canonicalize(input: &str) -> Result<String, TextError> {
    encode(decode(input)?)
}

// ============ RomanEncode ============

pub struct RomanEncode;

static ROMAN_ENCODE_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("value", "Number | Text", "Integer between 1 and 3999"),
];

static ROMAN_ENCODE_EXAMPLES: [&str; 3] = [
    "roman_encode(37) → \"XXXVII\"",
    "roman_encode(\"2020\") → \"MMXX\"",
    "roman_encode(4000) → #ERROR",
];

static ROMAN_ENCODE_RELATED: [&str; 2] = ["roman_decode", "roman_range"];

impl FunctionPlugin for RomanEncode {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "roman_encode",
            description: "Convert an integer into a Roman numeral",
            usage: "roman_encode(value)",
            args: &ROMAN_ENCODE_ARGS,
            returns: "Text",
            examples: &ROMAN_ENCODE_EXAMPLES,
            category: "text/roman",
            related: &ROMAN_ENCODE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let encoded = match args.first() {
            Some(Value::Number(n)) => match n.to_i64() {
                Some(i) => encode(i),
                None => Err(TextError::NotAnInteger),
            },
            Some(Value::Text(s)) => encode_str(s),
            Some(Value::Error(e)) => return Value::Error(e.clone()),
            Some(_) => Err(TextError::NotAnInteger),
            None => return Value::Error(WordsmithError::arg_count("roman_encode", 1, 0)),
        };

        match encoded {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(WordsmithError::from(e).in_function("roman_encode")),
        }
    }
}

// ============ RomanDecode ============

pub struct RomanDecode;

static ROMAN_DECODE_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("numeral", "Text", "Roman numeral, any case"),
];

static ROMAN_DECODE_EXAMPLES: [&str; 3] = [
    "roman_decode(\"VII\") → 7",
    "roman_decode(\"mmxx\") → 2020",
    "roman_decode(\"OK\") → #ERROR",
];

static ROMAN_DECODE_RELATED: [&str; 1] = ["roman_encode"];

impl FunctionPlugin for RomanDecode {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "roman_decode",
            description: "Convert a Roman numeral into an integer",
            usage: "roman_decode(numeral)",
            args: &ROMAN_DECODE_ARGS,
            returns: "Number",
            examples: &ROMAN_DECODE_EXAMPLES,
            category: "text/roman",
            related: &ROMAN_DECODE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match require_text(args, "roman_decode") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match decode(text) {
            Ok(n) => Value::from(n),
            Err(e) => Value::Error(WordsmithError::from(e).in_function("roman_decode")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_ctx() -> EvalContext {
        EvalContext::new(std::sync::Arc::new(PluginRegistry::new()))
    }

    #[test]
    fn test_encode_units() {
        let expected = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
        for (i, s) in expected.iter().enumerate() {
            assert_eq!(encode(i as i64 + 1).unwrap(), *s);
        }
    }

    #[test]
    fn test_encode_tiers() {
        assert_eq!(encode(40).unwrap(), "XL");
        assert_eq!(encode(90).unwrap(), "XC");
        assert_eq!(encode(400).unwrap(), "CD");
        assert_eq!(encode(900).unwrap(), "CM");
        assert_eq!(encode(1984).unwrap(), "MCMLXXXIV");
        assert_eq!(encode(2020).unwrap(), "MMXX");
        assert_eq!(encode(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_encode_out_of_range() {
        for value in [0, -12, 4000] {
            assert_eq!(
                encode(value).unwrap_err().to_string(),
                "Input must be >= 1 and <= 3999"
            );
        }
    }

    #[test]
    fn test_encode_str() {
        assert_eq!(encode_str("15").unwrap(), "XV");
        assert_eq!(encode_str("9").unwrap(), "IX");
        assert_eq!(encode_str("1.1").unwrap_err(), TextError::NotAnInteger);
        assert_eq!(encode_str("abc").unwrap_err(), TextError::NotAnInteger);
        assert!(matches!(encode_str("-4").unwrap_err(), TextError::OutOfRange(_)));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("I").unwrap(), 1);
        assert_eq!(decode("IX").unwrap(), 9);
        assert_eq!(decode("XLII").unwrap(), 42);
        assert_eq!(decode("mcmlxxxiv").unwrap(), 1984);
        assert_eq!(decode("MMMCMXCIX").unwrap(), 3999);
    }

    #[test]
    fn test_decode_reports_first_invalid_symbol_from_the_right() {
        assert_eq!(decode("wtf?").unwrap_err(), TextError::InvalidToken('?'));
        assert_eq!(decode("OK").unwrap_err(), TextError::InvalidToken('K'));
        assert_eq!(decode("QMMMCCCLXXXVII").unwrap_err(), TextError::InvalidToken('Q'));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap_err(), TextError::EmptyInput);
        assert_eq!(decode("   ").unwrap_err(), TextError::EmptyInput);
    }

    #[test]
    fn test_round_trip() {
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = encode(n).unwrap();
            assert_eq!(decode(&numeral).unwrap(), n);
            assert_eq!(decode(&numeral.to_lowercase()).unwrap(), n);
        }
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("iiii").unwrap(), "IV");
        assert_eq!(canonicalize("mmxx").unwrap(), "MMXX");
    }

    #[test]
    fn test_roman_encode_plugin() {
        let f = RomanEncode;
        let result = f.call(&[Value::from(37)], &eval_ctx());
        assert_eq!(result.as_text(), Some("XXXVII"));

        let result = f.call(&[Value::from("2020")], &eval_ctx());
        assert_eq!(result.as_text(), Some("MMXX"));

        let result = f.call(&[Value::Number(Number::from_str("1.5").unwrap())], &eval_ctx());
        assert_eq!(result.as_error().unwrap().code, codes::DOMAIN_ERROR);

        let result = f.call(&[Value::Bool(false)], &eval_ctx());
        let err = result.as_error().unwrap();
        assert_eq!(err.message, "Invalid input, only strings or integers are allowed");
    }

    #[test]
    fn test_roman_decode_plugin() {
        let f = RomanDecode;
        let result = f.call(&[Value::from("xlii")], &eval_ctx());
        assert_eq!(result.as_number().unwrap().to_i64(), Some(42));

        let result = f.call(&[Value::from("OK")], &eval_ctx());
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::INVALID_TOKEN);
        assert_eq!(err.message, "Invalid token found: \"K\"");

        let result = f.call(&[Value::from(12)], &eval_ctx());
        assert_eq!(result.as_error().unwrap().code, codes::INVALID_INPUT);
    }
}
