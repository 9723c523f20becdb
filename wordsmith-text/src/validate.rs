//! Text validation: is_string, is_full_string, is_number, is_integer, is_decimal,
//! is_url, is_email, is_credit_card, is_camel_case, is_snake_case, is_json,
//! is_uuid, is_ip_v4, is_ip_v6, is_ip, is_isbn_10, is_isbn_13, is_isbn,
//! is_palindrome, is_pangram, is_isogram, is_slug, contains_html, words_count
//!
//! Predicates answer `false` for subjects that are not text. `contains_html`,
//! `words_count` and the ISBN checks need text and report anything else as an
//! error.

use std::collections::HashSet;
use wordsmith_plugin::prelude::*;
use crate::helpers::{bool_or, get_regex, predicate_text, require_text, text_or};
use crate::patterns::{self, fancy_is_match, CREDIT_CARD_TYPES};
use crate::TextError;

const EMAIL_MAX_LEN: usize = 320;
const EMAIL_HEAD_MAX_LEN: usize = 64;
const EMAIL_TAIL_MAX_LEN: usize = 255;

/// Not empty and not only whitespace
pub fn is_full_string(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Signed integer, decimal or exponent notation ("42", "-1.5", "1e3")
pub fn is_number(input: &str) -> bool {
    patterns::number().is_match(input)
}

pub fn is_integer(input: &str) -> bool {
    is_number(input) && !input.contains('.')
}

pub fn is_decimal(input: &str) -> bool {
    is_number(input) && input.contains('.')
}

/// Whole string is a URL, optionally restricted to some schemes
pub fn is_url(input: &str, allowed_schemes: &[&str]) -> bool {
    if !is_full_string(input) || !fancy_is_match(patterns::url(), input) {
        return false;
    }
    allowed_schemes.is_empty() || allowed_schemes.iter().any(|s| input.starts_with(s))
}

/// Real-world email check: length limits, quoted and escaped local parts
pub fn is_email(input: &str) -> bool {
    if !is_full_string(input) || input.chars().count() > EMAIL_MAX_LEN || input.starts_with('.') {
        return false;
    }

    let parts: Vec<&str> = input.split('@').collect();
    if let [head, tail] = parts.as_slice() {
        if head.chars().count() > EMAIL_HEAD_MAX_LEN
            || tail.chars().count() > EMAIL_TAIL_MAX_LEN
            || head.ends_with('.')
            || head.contains("..")
        {
            return false;
        }

        let mut head = head.replace("\\ ", "");
        if head.len() >= 2 && head.starts_with('"') && head.ends_with('"') {
            head = head.replace(' ', "");
            head = head[1..head.len() - 1].to_string();
        }
        return patterns::email().is_match(&format!("{}@{}", head, tail));
    }

    // More than one '@': allowed only when the extra ones are quoted or escaped
    if fancy_is_match(patterns::escaped_at_sign(), input) {
        if let Ok(unescaped) = patterns::replace_all(patterns::escaped_at_sign(), input, |_| "a".to_string()) {
            return is_email(&unescaped);
        }
    }
    false
}

/// Card number check, for one card type or any known type
pub fn is_credit_card(input: &str, card_type: Option<&str>) -> Result<bool, TextError> {
    if !is_full_string(input) {
        return Ok(false);
    }

    match card_type {
        Some(t) => match patterns::credit_card(t) {
            Some(re) => Ok(re.is_match(input)),
            None => Err(TextError::InvalidArgument(format!(
                "Invalid card type \"{}\". Valid types are: {}",
                t,
                CREDIT_CARD_TYPES.join(", ")
            ))),
        },
        None => Ok(CREDIT_CARD_TYPES
            .iter()
            .filter_map(|t| patterns::credit_card(t))
            .any(|re| re.is_match(input))),
    }
}

/// Letters and digits, not starting with a digit, with lower and upper case mixed
pub fn is_camel_case(input: &str) -> bool {
    is_full_string(input) && patterns::camel_case_test().is_match(input)
}

/// Lowercase or uppercase words joined by `separator`
pub fn is_snake_case(input: &str, separator: &str) -> bool {
    if !is_full_string(input) {
        return false;
    }
    patterns::snake_case_test(separator)
        .map(|re| re.is_match(input))
        .unwrap_or(false)
}

/// A JSON object or array
pub fn is_json(input: &str) -> bool {
    if !is_full_string(input) || !patterns::json_wrapper().is_match(input) {
        return false;
    }
    serde_json::from_str::<serde_json::Value>(input)
        .map(|v| v.is_object() || v.is_array())
        .unwrap_or(false)
}

/// Dashed UUID; with `allow_hex` the dashes are optional
pub fn is_uuid(input: &str, allow_hex: bool) -> bool {
    if allow_hex {
        patterns::uuid_hex_ok().is_match(input)
    } else {
        patterns::uuid().is_match(input)
    }
}

pub fn is_ip_v4(input: &str) -> bool {
    if !is_full_string(input) || !patterns::shallow_ip_v4().is_match(input) {
        return false;
    }
    input.split('.').all(|octet| octet.parse::<u32>().map_or(false, |n| n <= 255))
}

pub fn is_ip_v6(input: &str) -> bool {
    is_full_string(input) && patterns::ip_v6().is_match(input)
}

pub fn is_ip(input: &str) -> bool {
    is_ip_v6(input) || is_ip_v4(input)
}

fn isbn_digits(input: &str, normalize: bool) -> Option<Vec<u32>> {
    input
        .chars()
        .filter(|c| !(normalize && *c == '-'))
        .map(|c| c.to_digit(10))
        .collect()
}

/// Ten digits whose weighted sum (weights 1..=10) is a multiple of 11
pub fn is_isbn_10(input: &str, normalize: bool) -> bool {
    match isbn_digits(input, normalize) {
        Some(digits) if digits.len() == 10 => {
            let sum: u32 = digits.iter().enumerate().map(|(i, d)| d * (i as u32 + 1)).sum();
            sum % 11 == 0
        }
        _ => false,
    }
}

/// Thirteen digits whose alternating 1/3 weighted sum is a multiple of 10
pub fn is_isbn_13(input: &str, normalize: bool) -> bool {
    match isbn_digits(input, normalize) {
        Some(digits) if digits.len() == 13 => {
            let sum: u32 = digits
                .iter()
                .enumerate()
                .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
                .sum();
            sum % 10 == 0
        }
        _ => false,
    }
}

pub fn is_isbn(input: &str, normalize: bool) -> bool {
    is_isbn_13(input, normalize) || is_isbn_10(input, normalize)
}

pub fn is_palindrome(input: &str, ignore_spaces: bool, ignore_case: bool) -> bool {
    if !is_full_string(input) {
        return false;
    }

    let mut subject: String = input
        .chars()
        .filter(|c| !(ignore_spaces && c.is_whitespace()))
        .collect();
    if ignore_case {
        subject = subject.to_lowercase();
    }
    subject.chars().eq(subject.chars().rev())
}

/// Uses every letter of the English alphabet
pub fn is_pangram(input: &str) -> bool {
    if !is_full_string(input) {
        return false;
    }
    let seen: HashSet<char> = input.to_lowercase().chars().collect();
    ('a'..='z').all(|c| seen.contains(&c))
}

/// No character appears twice
pub fn is_isogram(input: &str) -> bool {
    if !is_full_string(input) {
        return false;
    }
    let mut seen = HashSet::new();
    input.chars().all(|c| seen.insert(c))
}

/// Lowercase ASCII words joined by `separator`
pub fn is_slug(input: &str, separator: &str) -> bool {
    if !is_full_string(input) {
        return false;
    }
    let pattern = format!(r"^([a-z\d]+{}*?)*[a-z\d]$", regex::escape(separator));
    get_regex(&pattern).map(|re| re.is_match(input)).unwrap_or(false)
}

pub fn contains_html(input: &str) -> bool {
    patterns::html().is_match(input)
}

/// Words made of letters and digits; punctuation and underscores separate them
pub fn words_count(input: &str) -> usize {
    patterns::words_count().find_iter(input).count()
}

// ============ Single-argument predicates ============

macro_rules! predicate_fn {
    ($struct:ident, $name:literal, $desc:literal, $check:path, $examples:expr, $related:expr) => {
        pub struct $struct;

        impl FunctionPlugin for $struct {
            fn meta(&self) -> FunctionMeta {
                static EXAMPLES: &[&str] = $examples;
                static RELATED: &[&str] = $related;
                FunctionMeta {
                    name: $name,
                    description: $desc,
                    usage: concat!($name, "(text)"),
                    args: &TEXT_ARG,
                    returns: "Bool",
                    examples: EXAMPLES,
                    category: "text/validate",
                    related: RELATED,
                }
            }

            fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
                if args.len() != 1 {
                    return Value::Error(WordsmithError::arg_count($name, 1, args.len()));
                }
                match predicate_text(args) {
                    Ok(Some(s)) => Value::Bool($check(s)),
                    Ok(None) => Value::Bool(false),
                    Err(e) => Value::Error(e),
                }
            }
        }
    };
}

static TEXT_ARG: [ArgMeta; 1] = [ArgMeta::required("text", "Text", "Text to check")];

predicate_fn!(IsFullString, "is_full_string", "Check that text is not empty or whitespace-only", is_full_string,
    &["is_full_string(\" \") → false", "is_full_string(\"a\") → true"], &["is_string"]);
predicate_fn!(IsNumber, "is_number", "Check for a signed integer, decimal or exponent notation number", is_number,
    &["is_number(\"-1.5e3\") → true", "is_number(\"1,5\") → false"], &["is_integer", "is_decimal"]);
predicate_fn!(IsInteger, "is_integer", "Check for an integer number", is_integer,
    &["is_integer(\"42\") → true", "is_integer(\"4.2\") → false"], &["is_number", "is_decimal"]);
predicate_fn!(IsDecimal, "is_decimal", "Check for a decimal number", is_decimal,
    &["is_decimal(\"4.2\") → true", "is_decimal(\"42\") → false"], &["is_number", "is_integer"]);
predicate_fn!(IsEmail, "is_email", "Check for an email address", is_email,
    &["is_email(\"me@site.com\") → true", "is_email(\"@site.com\") → false"], &["is_url"]);
predicate_fn!(IsCamelCase, "is_camel_case", "Check for camelCase or PascalCase", is_camel_case,
    &["is_camel_case(\"MyString\") → true", "is_camel_case(\"mystring\") → false"], &["is_snake_case", "camel_case_to_snake"]);
predicate_fn!(IsJson, "is_json", "Check for a JSON object or array", is_json,
    &["is_json(\"{\\\"a\\\": 1}\") → true", "is_json(\"{a: 1}\") → false"], &[]);
predicate_fn!(IsIpV4, "is_ip_v4", "Check for an IPv4 address", is_ip_v4,
    &["is_ip_v4(\"127.0.0.1\") → true", "is_ip_v4(\"999.0.0.1\") → false"], &["is_ip_v6", "is_ip"]);
predicate_fn!(IsIpV6, "is_ip_v6", "Check for an IPv6 address", is_ip_v6,
    &["is_ip_v6(\"2001:db8:85a3:0:0:8a2e:370:7334\") → true"], &["is_ip_v4", "is_ip"]);
predicate_fn!(IsIp, "is_ip", "Check for an IPv4 or IPv6 address", is_ip,
    &["is_ip(\"255.200.100.75\") → true"], &["is_ip_v4", "is_ip_v6"]);
predicate_fn!(IsPangram, "is_pangram", "Check that text uses every letter of the alphabet", is_pangram,
    &["is_pangram(\"The quick brown fox jumps over the lazy dog\") → true"], &["is_isogram"]);
predicate_fn!(IsIsogram, "is_isogram", "Check that no character repeats", is_isogram,
    &["is_isogram(\"dermatoglyphics\") → true", "is_isogram(\"hello\") → false"], &["is_pangram"]);

// ============ IsString ============

pub struct IsString;

static IS_STRING_ARGS: [ArgMeta; 1] = [ArgMeta::required("value", "Any", "Value to check")];

static IS_STRING_EXAMPLES: [&str; 2] = [
    "is_string(\"foo\") → true",
    "is_string(42) → false",
];

static IS_STRING_RELATED: [&str; 1] = ["is_full_string"];

impl FunctionPlugin for IsString {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_string",
            description: "Check that a value is text",
            usage: "is_string(value)",
            args: &IS_STRING_ARGS,
            returns: "Bool",
            examples: &IS_STRING_EXAMPLES,
            category: "text/validate",
            related: &IS_STRING_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match args.first() {
            Some(Value::Error(e)) => Value::Error(e.clone()),
            Some(v) => Value::Bool(matches!(v, Value::Text(_))),
            None => Value::Error(WordsmithError::arg_count("is_string", 1, 0)),
        }
    }
}

// ============ IsUrl ============

pub struct IsUrl;

static IS_URL_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Text to check"),
    ArgMeta::optional("allowed_schemes", "List<Text>", "Accepted schemes, any when empty", "[]"),
];

static IS_URL_EXAMPLES: [&str; 2] = [
    "is_url(\"http://www.site.com\") → true",
    "is_url(\"git://site.com\", [\"http\", \"https\"]) → false",
];

static IS_URL_RELATED: [&str; 1] = ["is_email"];

impl FunctionPlugin for IsUrl {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_url",
            description: "Check for a URL, optionally with one of the given schemes",
            usage: "is_url(text, [allowed_schemes])",
            args: &IS_URL_ARGS,
            returns: "Bool",
            examples: &IS_URL_EXAMPLES,
            category: "text/validate",
            related: &IS_URL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match predicate_text(args) {
            Ok(Some(s)) => s,
            Ok(None) => return Value::Bool(false),
            Err(e) => return Value::Error(e),
        };

        let schemes: Vec<&str> = match args.get(1) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::List(items)) => items.iter().filter_map(|v| v.as_text()).collect(),
            Some(Value::Text(s)) => vec![s.as_str()],
            Some(Value::Error(e)) => return Value::Error(e.clone()),
            Some(other) => {
                return Value::Error(WordsmithError::arg_type(
                    "is_url", "allowed_schemes", "List<Text>", other.type_name(),
                ))
            }
        };

        Value::Bool(is_url(text, &schemes))
    }
}

// ============ IsCreditCard ============

pub struct IsCreditCard;

static IS_CREDIT_CARD_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Card number, digits only"),
    ArgMeta::optional("card_type", "Text",
        "VISA, MASTERCARD, AMERICAN_EXPRESS, DINERS_CLUB, DISCOVER or JCB", "any"),
];

static IS_CREDIT_CARD_EXAMPLES: [&str; 2] = [
    "is_credit_card(\"4111111111111111\") → true",
    "is_credit_card(\"4111111111111111\", \"MASTERCARD\") → false",
];

static IS_CREDIT_CARD_RELATED: [&str; 0] = [];

impl FunctionPlugin for IsCreditCard {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_credit_card",
            description: "Check for a credit card number",
            usage: "is_credit_card(text, [card_type])",
            args: &IS_CREDIT_CARD_ARGS,
            returns: "Bool",
            examples: &IS_CREDIT_CARD_EXAMPLES,
            category: "text/validate",
            related: &IS_CREDIT_CARD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let card_type = match args.get(1) {
            None | Some(Value::Null) => None,
            Some(Value::Text(t)) => Some(t.as_str()),
            Some(Value::Error(e)) => return Value::Error(e.clone()),
            Some(other) => {
                return Value::Error(WordsmithError::arg_type(
                    "is_credit_card", "card_type", "Text", other.type_name(),
                ))
            }
        };

        let text = match predicate_text(args) {
            Ok(Some(s)) => s,
            Ok(None) => return Value::Bool(false),
            Err(e) => return Value::Error(e),
        };

        match is_credit_card(text, card_type) {
            Ok(b) => Value::Bool(b),
            Err(e) => Value::Error(WordsmithError::from(e)
                .in_function("is_credit_card")
                .for_argument("card_type")),
        }
    }
}

// ============ IsSnakeCase ============

pub struct IsSnakeCase;

static IS_SNAKE_CASE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Text to check"),
    ArgMeta::optional("separator", "Text", "Word separator", "_"),
];

static IS_SNAKE_CASE_EXAMPLES: [&str; 3] = [
    "is_snake_case(\"foo_bar\") → true",
    "is_snake_case(\"foo-bar\", \"-\") → true",
    "is_snake_case(\"foo\") → false",
];

static IS_SNAKE_CASE_RELATED: [&str; 2] = ["is_camel_case", "snake_case_to_camel"];

impl FunctionPlugin for IsSnakeCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_snake_case",
            description: "Check for words joined by a separator",
            usage: "is_snake_case(text, [separator])",
            args: &IS_SNAKE_CASE_ARGS,
            returns: "Bool",
            examples: &IS_SNAKE_CASE_EXAMPLES,
            category: "text/validate",
            related: &IS_SNAKE_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let separator = match text_or(args, 1, "_", "is_snake_case", "separator") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        match predicate_text(args) {
            Ok(Some(s)) => Value::Bool(is_snake_case(s, separator)),
            Ok(None) => Value::Bool(false),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ IsUuid ============

pub struct IsUuid;

static IS_UUID_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Text to check"),
    ArgMeta::optional("allow_hex", "Bool", "Accept the 32 digit form without dashes", "false"),
];

static IS_UUID_EXAMPLES: [&str; 2] = [
    "is_uuid(\"6f8aa2f9-686c-4ac3-8766-5712354a04cf\") → true",
    "is_uuid(\"6f8aa2f9686c4ac387665712354a04cf\", true) → true",
];

static IS_UUID_RELATED: [&str; 1] = ["uuid"];

impl FunctionPlugin for IsUuid {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_uuid",
            description: "Check for a UUID",
            usage: "is_uuid(text, [allow_hex])",
            args: &IS_UUID_ARGS,
            returns: "Bool",
            examples: &IS_UUID_EXAMPLES,
            category: "text/validate",
            related: &IS_UUID_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let allow_hex = match bool_or(args, 1, false, "is_uuid", "allow_hex") {
            Ok(b) => b,
            Err(e) => return Value::Error(e),
        };
        match predicate_text(args) {
            Ok(Some(s)) => Value::Bool(is_uuid(s, allow_hex)),
            Ok(None) => Value::Bool(false),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ ISBN ============

static ISBN_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "ISBN to check"),
    ArgMeta::optional("normalize", "Bool", "Ignore hyphens", "true"),
];

static ISBN_RELATED: [&str; 3] = ["is_isbn", "is_isbn_10", "is_isbn_13"];

fn isbn_call(args: &[Value], func: &str, check: fn(&str, bool) -> bool) -> Value {
    let text = match require_text(args, func) {
        Ok(s) => s,
        Err(e) => return Value::Error(e),
    };
    match bool_or(args, 1, true, func, "normalize") {
        Ok(normalize) => Value::Bool(check(text, normalize)),
        Err(e) => Value::Error(e),
    }
}

pub struct IsIsbn10;

static IS_ISBN_10_EXAMPLES: [&str; 2] = [
    "is_isbn_10(\"1506715214\") → true",
    "is_isbn_10(\"150-6715214\") → true",
];

impl FunctionPlugin for IsIsbn10 {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_isbn_10",
            description: "Check for a valid ISBN-10",
            usage: "is_isbn_10(text, [normalize])",
            args: &ISBN_ARGS,
            returns: "Bool",
            examples: &IS_ISBN_10_EXAMPLES,
            category: "text/validate",
            related: &ISBN_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        isbn_call(args, "is_isbn_10", is_isbn_10)
    }
}

pub struct IsIsbn13;

static IS_ISBN_13_EXAMPLES: [&str; 2] = [
    "is_isbn_13(\"9780312498580\") → true",
    "is_isbn_13(\"978-0312498580\", false) → false",
];

impl FunctionPlugin for IsIsbn13 {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_isbn_13",
            description: "Check for a valid ISBN-13",
            usage: "is_isbn_13(text, [normalize])",
            args: &ISBN_ARGS,
            returns: "Bool",
            examples: &IS_ISBN_13_EXAMPLES,
            category: "text/validate",
            related: &ISBN_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        isbn_call(args, "is_isbn_13", is_isbn_13)
    }
}

pub struct IsIsbn;

static IS_ISBN_EXAMPLES: [&str; 2] = [
    "is_isbn(\"9780312498580\") → true",
    "is_isbn(\"1506715214\") → true",
];

impl FunctionPlugin for IsIsbn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_isbn",
            description: "Check for a valid ISBN-10 or ISBN-13",
            usage: "is_isbn(text, [normalize])",
            args: &ISBN_ARGS,
            returns: "Bool",
            examples: &IS_ISBN_EXAMPLES,
            category: "text/validate",
            related: &ISBN_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        isbn_call(args, "is_isbn", is_isbn)
    }
}

// ============ IsPalindrome ============

pub struct IsPalindrome;

static IS_PALINDROME_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("text", "Text", "Text to check"),
    ArgMeta::optional("ignore_spaces", "Bool", "Drop whitespace before comparing", "false"),
    ArgMeta::optional("ignore_case", "Bool", "Compare case-insensitively", "false"),
];

static IS_PALINDROME_EXAMPLES: [&str; 2] = [
    "is_palindrome(\"LOL\") → true",
    "is_palindrome(\"Lol\") → false",
];

static IS_PALINDROME_RELATED: [&str; 1] = ["reverse"];

impl FunctionPlugin for IsPalindrome {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_palindrome",
            description: "Check that text reads the same backwards",
            usage: "is_palindrome(text, [ignore_spaces], [ignore_case])",
            args: &IS_PALINDROME_ARGS,
            returns: "Bool",
            examples: &IS_PALINDROME_EXAMPLES,
            category: "text/validate",
            related: &IS_PALINDROME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let options = bool_or(args, 1, false, "is_palindrome", "ignore_spaces")
            .and_then(|spaces| Ok((spaces, bool_or(args, 2, false, "is_palindrome", "ignore_case")?)));
        let (ignore_spaces, ignore_case) = match options {
            Ok(o) => o,
            Err(e) => return Value::Error(e),
        };
        match predicate_text(args) {
            Ok(Some(s)) => Value::Bool(is_palindrome(s, ignore_spaces, ignore_case)),
            Ok(None) => Value::Bool(false),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ IsSlug ============

pub struct IsSlug;

static IS_SLUG_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Text to check"),
    ArgMeta::optional("separator", "Text", "Word separator", "-"),
];

static IS_SLUG_EXAMPLES: [&str; 2] = [
    "is_slug(\"my-blog-post-title\") → true",
    "is_slug(\"My blog post title\") → false",
];

static IS_SLUG_RELATED: [&str; 1] = ["slugify"];

impl FunctionPlugin for IsSlug {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_slug",
            description: "Check for a lowercase slug",
            usage: "is_slug(text, [separator])",
            args: &IS_SLUG_ARGS,
            returns: "Bool",
            examples: &IS_SLUG_EXAMPLES,
            category: "text/validate",
            related: &IS_SLUG_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let separator = match text_or(args, 1, "-", "is_slug", "separator") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        match predicate_text(args) {
            Ok(Some(s)) => Value::Bool(is_slug(s, separator)),
            Ok(None) => Value::Bool(false),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ ContainsHtml ============

pub struct ContainsHtml;

static CONTAINS_HTML_EXAMPLES: [&str; 2] = [
    "contains_html(\"my string is <strong>bold</strong>\") → true",
    "contains_html(\"my string is not bold\") → false",
];

static CONTAINS_HTML_RELATED: [&str; 1] = ["strip_html"];

impl FunctionPlugin for ContainsHtml {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "contains_html",
            description: "Check whether text contains HTML or XML tags",
            usage: "contains_html(text)",
            args: &TEXT_ARG,
            returns: "Bool",
            examples: &CONTAINS_HTML_EXAMPLES,
            category: "text/validate",
            related: &CONTAINS_HTML_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "contains_html") {
            Ok(s) => Value::Bool(contains_html(s)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ WordsCount ============

pub struct WordsCount;

static WORDS_COUNT_EXAMPLES: [&str; 2] = [
    "words_count(\"hello world\") → 2",
    "words_count(\"one,two,three.stop\") → 4",
];

static WORDS_COUNT_RELATED: [&str; 0] = [];

impl FunctionPlugin for WordsCount {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "words_count",
            description: "Count words; punctuation and underscores separate words",
            usage: "words_count(text)",
            args: &TEXT_ARG,
            returns: "Number",
            examples: &WORDS_COUNT_EXAMPLES,
            category: "text/validate",
            related: &WORDS_COUNT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "words_count") {
            Ok(s) => Value::from(words_count(s) as i64),
            Err(e) => Value::Error(e),
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
    fn test_is_full_string() {
        assert!(!is_full_string(""));
        assert!(!is_full_string(" \n\t "));
        assert!(is_full_string(" a "));
    }

    #[test]
    fn test_numbers() {
        assert!(is_number("42"));
        assert!(is_number("-1.5"));
        assert!(is_number("+1e3"));
        assert!(is_number(".5"));
        assert!(!is_number("1,5"));
        assert!(!is_number(" 1"));
        assert!(is_integer("-42"));
        assert!(!is_integer("4.2"));
        assert!(is_decimal("4.2"));
        assert!(!is_decimal("42"));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("http://www.site.com", &[]));
        assert!(is_url("http://localhost:8080", &[]));
        assert!(is_url("http://123.123.123.123", &[]));
        assert!(is_url("http://site.com/foo/?foo=bar&baz=1&", &[]));
        assert!(!is_url(" http://www.google.com", &[]));
        assert!(!is_url("http://www.goo gle.com", &[]));
        assert!(!is_url("http://.site.com", &[]));
        assert!(!is_url("http://-site.com", &[]));
        assert!(!is_url("http://123.123.123.1234", &[]));
        assert!(!is_url("git://site.com", &["http", "https"]));
        assert!(is_url("https://site.com", &["http", "https"]));
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("me@foo.com"));
        assert!(is_email("first_name.last_name@yahoo.it"));
        assert!(is_email("UPPER_CASE_EMAIL@somesite.com"));
        assert!(is_email("my+mail@gmail.com"));
        assert!(is_email("{mymail}@gmail.com"));
        assert!(!is_email("name@"));
        assert!(!is_email("@foo.com"));
        assert!(!is_email("name@site"));
        assert!(!is_email("me@foo.toolongext"));
        assert!(!is_email("someone@SOMESITE.COM"));
        assert!(!is_email("name@em..ail.net"));
        assert!(!is_email("name@d.com"));
        assert!(!is_email("mymail@foo+bar.com"));
    }

    #[test]
    fn test_is_email_local_part_rules() {
        assert!(!is_email(".myemail@gmail.com"));
        assert!(!is_email("myemail.@gmail.com"));
        assert!(!is_email("my..email@gmail.com"));
        assert!(!is_email("my mail@gmail.com"));
        assert!(is_email("my\\ mail@gmail.com"));
        assert!(is_email("\"my mail\"@gmail.com"));
        assert!(!is_email("\"nope@gmail.com"));
        assert!(!is_email("\"\"@gmail.com"));
        assert!(!is_email("\"no\"pe\"@gmail.com"));
        assert!(is_email("\"Abc@def\"@example.com"));
        assert!(is_email("Abc\\@def@example.com"));
        assert!(is_email("Joe.\\\\Blow@example.com"));
        assert!(!is_email(&format!("{}@gmail.com", "a".repeat(65))));
    }

    #[test]
    fn test_is_credit_card() {
        assert!(is_credit_card("4111111111111111", None).unwrap());
        assert!(is_credit_card("5555555555554444", Some("MASTERCARD")).unwrap());
        assert!(!is_credit_card("4111111111111111", Some("MASTERCARD")).unwrap());
        assert!(is_credit_card("378282246310005", Some("AMERICAN_EXPRESS")).unwrap());
        assert!(!is_credit_card("1234", None).unwrap());
        assert!(is_credit_card("4111111111111111", Some("NOPE")).is_err());
    }

    #[test]
    fn test_is_camel_case() {
        assert!(is_camel_case("Camel"));
        assert!(is_camel_case("CamelCaseTOO"));
        assert!(is_camel_case("camelCase"));
        assert!(!is_camel_case("lowercase"));
        assert!(!is_camel_case("1000Times"));
        assert!(!is_camel_case(" CamelCase "));
        assert!(!is_camel_case("Camel_Case"));
    }

    #[test]
    fn test_is_snake_case() {
        for s in ["HELLO_WORLD", "_hello_world", "a_", "_b", "snake_2", "foo_bar_baz"] {
            assert!(is_snake_case(s, "_"), "{}", s);
        }
        for s in ["_", "1_no_snake", "no_snake#", "no_!", "lowercaseonly", ""] {
            assert!(!is_snake_case(s, "_"), "{}", s);
        }
        assert!(is_snake_case("foo-bar", "-"));
        assert!(!is_snake_case("foo_bar", "-"));
    }

    #[test]
    fn test_is_json() {
        assert!(is_json("{}"));
        assert!(is_json("[]"));
        assert!(is_json(" { \"foo\": \"bar\" } "));
        assert!(is_json("[{\"a\": \"b\"}]"));
        assert!(is_json("{\"number\": -2.5}"));
        assert!(!is_json(""));
        assert!(!is_json("{foo: 1}"));
        assert!(!is_json("{'foo': 1}"));
        assert!(!is_json("{\"bool\": True}"));
        assert!(!is_json("{\"numbers\": [1,2,3,]}"));
        assert!(!is_json("42"));
    }

    #[test]
    fn test_is_uuid() {
        assert!(is_uuid("6f8aa2f9-686c-4ac3-8766-5712354a04cf", false));
        assert!(is_uuid("6F8AA2F9-686C-4AC3-8766-5712354A04CF", false));
        assert!(!is_uuid("6f8aa2f9686c4ac387665712354a04cf", false));
        assert!(is_uuid("6f8aa2f9686c4ac387665712354a04cf", true));
        assert!(!is_uuid("6f8aa2f9-686c-4ac3-8766-5712354a04c", true));
    }

    #[test]
    fn test_is_ip() {
        assert!(is_ip_v4("127.0.0.1"));
        assert!(is_ip_v4("0.0.0.0"));
        assert!(!is_ip_v4("255.200.100.999"));
        assert!(!is_ip_v4(" 127.0.0.1 "));
        assert!(!is_ip_v4("127.0.0..1"));
        assert!(is_ip_v6("2001:db8:85a3:0000:0000:8a2e:370:7334"));
        assert!(is_ip_v6("2001:db8:85a3:0:0:8a2e:370:7334"));
        assert!(!is_ip_v6("2001:db8:85a3:0:0:8a2e:370"));
        assert!(!is_ip_v6("2001.db8:85a3:0000:0000:8a2e:370:7334"));
        assert!(is_ip("255.200.100.75"));
        assert!(is_ip("2001:db8:85a3:0000:0000:8a2e:370:7334"));
        assert!(!is_ip("1.2.3"));
    }

    #[test]
    fn test_isbn() {
        assert!(is_isbn_10("1506715214", true));
        assert!(is_isbn_10("150-6715214", true));
        assert!(is_isbn_10("8-8-3-0-1-0-2-1-8-0", true));
        assert!(!is_isbn_10("150-6715214", false));
        assert!(!is_isbn_10("9788830102187", true));
        assert!(!is_isbn_10("1506715214y", true));
        assert!(is_isbn_13("9780312498580", true));
        assert!(is_isbn_13("978-0-0-6-2-8-5-3-8-5-1", true));
        assert!(!is_isbn_13("8891229245", true));
        assert!(!is_isbn_13(" 9780312498580", true));
        assert!(is_isbn("9780312498580", true));
        assert!(is_isbn("1506715214", true));
        assert!(!is_isbn("", true));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("otto", false, false));
        assert!(!is_palindrome("nope!", false, false));
        assert!(!is_palindrome(" ", false, false));
        assert!(!is_palindrome("i topi non avevano nipoti", false, false));
        assert!(is_palindrome("i topi non avevano nipoti", true, false));
        assert!(!is_palindrome("Lol", false, false));
        assert!(is_palindrome("Lol", false, true));
    }

    #[test]
    fn test_pangram_and_isogram() {
        assert!(is_pangram("The quick brown fox jumps over the lazy dog"));
        assert!(!is_pangram("hello world"));
        assert!(is_isogram("dermatoglyphics"));
        assert!(!is_isogram("hello"));
        assert!(!is_isogram(" "));
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("yep-i-am-a-slug", "-"));
        assert!(is_slug("yep.i.am.a.slug", "."));
        assert!(is_slug("oh-----yeah", "-"));
        assert!(is_slug("x", "-"));
        assert!(is_slug("42", "-"));
        assert!(!is_slug("not - a - slug", "-"));
        assert!(!is_slug("foo-bar.", "-"));
        assert!(!is_slug("foò-bär", "-"));
        assert!(!is_slug("-nope-", "-"));
        assert!(!is_slug("NOT-AS-UPPERCASE", "-"));
        assert!(!is_slug("-", "-"));
    }

    #[test]
    fn test_contains_html() {
        assert!(contains_html("my string is <strong>bold</strong>"));
        assert!(contains_html("<br/>"));
        assert!(contains_html("<!-- comment -->"));
        assert!(!contains_html("my string is not bold"));
        assert!(!contains_html("5 < 6 and 7 > 3"));
    }

    #[test]
    fn test_words_count() {
        assert_eq!(words_count(". . ! <> [] {} + % --- _ = @ # ~ | \\ / \" '"), 0);
        assert_eq!(words_count("hello world"), 2);
        assert_eq!(words_count("jinja2"), 1);
        assert_eq!(words_count("hello_world"), 2);
        assert_eq!(words_count("hello-world"), 2);
        assert_eq!(words_count("one,two,three.stop"), 4);
    }

    #[test]
    fn test_predicate_plugins_reject_non_text_quietly() {
        let ctx = eval_ctx();
        assert_eq!(IsEmail.call(&[Value::Null], &ctx).as_bool(), Some(false));
        assert_eq!(IsJson.call(&[Value::from(500)], &ctx).as_bool(), Some(false));
        assert_eq!(IsString.call(&[Value::from(500)], &ctx).as_bool(), Some(false));
        assert_eq!(IsString.call(&[Value::from("x")], &ctx).as_bool(), Some(true));
        assert_eq!(IsFullString.call(&[], &ctx).as_error().unwrap().code, codes::ARG_COUNT);
    }

    #[test]
    fn test_text_only_plugins_report_invalid_input() {
        let ctx = eval_ctx();
        let err = WordsCount.call(&[Value::from(1)], &ctx);
        assert_eq!(err.as_error().unwrap().code, codes::INVALID_INPUT);
        let err = IsIsbn10.call(&[Value::from(9780312498580)], &ctx);
        assert_eq!(err.as_error().unwrap().code, codes::INVALID_INPUT);
    }

    #[test]
    fn test_option_plugins() {
        let ctx = eval_ctx();
        let result = IsUrl.call(
            &[Value::from("git://site.com"), Value::List(vec![Value::from("http")])],
            &ctx,
        );
        assert_eq!(result.as_bool(), Some(false));

        let result = IsSnakeCase.call(&[Value::from("foo-bar"), Value::from("-")], &ctx);
        assert_eq!(result.as_bool(), Some(true));

        let result = IsCreditCard.call(&[Value::from("4111111111111111"), Value::from("NOPE")], &ctx);
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
        assert!(err.message.starts_with("Invalid card type \"NOPE\""));

        let result = IsPalindrome.call(&[Value::from("Lol"), Value::Null, Value::Bool(true)], &ctx);
        assert_eq!(result.as_bool(), Some(true));

        let result = WordsCount.call(&[Value::from("hello world")], &ctx);
        assert_eq!(result.as_number().unwrap().to_i64(), Some(2));
    }
}
