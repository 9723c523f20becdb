//! Pattern library
//!
//! A fixed catalog of named patterns, compiled on first use and shared
//! read-only. Patterns that need look-around are compiled with `fancy_regex`,
//! the rest with `regex`.

use fancy_regex::{Captures, Regex as FancyRegex};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::warn;

use crate::helpers::get_regex;
use crate::TextError;

const URLS_RAW: &str = r"([a-z-]+://)([a-z_\d-]+:[a-z_\d-]+@)?(www\.)?((?<!\.)[a-z\d]+[a-z\d.-]+\.[a-z]{2,6}|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|localhost)(:\d{2,})?(/[a-z\d_%+-]*)*(\.[a-z\d_%+-]+)*(\?[a-z\d_+%-=]*)?(#\S*)?";

const EMAILS_RAW: &str = r"[a-zA-Z\d._\+\-'`!%#$&*/=\?\^\{\}\|~\\]+@[a-z\d-]+\.?[a-z\d-]+\.[a-z]{2,4}";

/// Card types understood by `is_credit_card`
pub const CREDIT_CARD_TYPES: [&str; 6] = [
    "VISA",
    "MASTERCARD",
    "AMERICAN_EXPRESS",
    "DINERS_CLUB",
    "DISCOVER",
    "JCB",
];

// ============ URLs and emails ============

/// URLs anywhere in a text
pub fn urls() -> &'static FancyRegex {
    static RE: OnceLock<FancyRegex> = OnceLock::new();
    RE.get_or_init(|| FancyRegex::new(&format!("(?i){}", URLS_RAW)).unwrap())
}

/// A whole string that is a URL
pub fn url() -> &'static FancyRegex {
    static RE: OnceLock<FancyRegex> = OnceLock::new();
    RE.get_or_init(|| FancyRegex::new(&format!("(?i)^{}$", URLS_RAW)).unwrap())
}

/// Email addresses anywhere in a text
pub fn emails() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAILS_RAW).unwrap())
}

/// A whole string that is an email address
pub fn email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}$", EMAILS_RAW)).unwrap())
}

/// `@` signs inside a quoted local part, or escaped with a backslash
pub fn escaped_at_sign() -> &'static FancyRegex {
    static RE: OnceLock<FancyRegex> = OnceLock::new();
    RE.get_or_init(|| FancyRegex::new(r#"(?!"[^"]*)@+(?=[^"]*")|\\@"#).unwrap())
}

// ============ Case styles ============

pub fn camel_case_test() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z]*([a-z]+[A-Z]+|[A-Z]+[a-z]+)[a-zA-Z\d]*$").unwrap())
}

/// Word boundary inside a camel case string (group 1 ends a word)
pub fn camel_case_replace() -> &'static FancyRegex {
    static RE: OnceLock<FancyRegex> = OnceLock::new();
    RE.get_or_init(|| FancyRegex::new(r"([a-z]|[A-Z]+)(?=[A-Z])").unwrap())
}

/// Snake case with the given separator, compiled once per separator
pub fn snake_case_test(separator: &str) -> Result<Regex, TextError> {
    let sep = regex::escape(separator);
    get_regex(&format!(
        r"(?i)^([a-z]+\d*{sep}[a-z\d{sep}]*|{sep}+[a-z\d]+[a-z\d{sep}]*)$",
        sep = sep
    ))
}

// ============ Identifiers and addresses ============

pub fn uuid() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-f\d]{8}-[a-f\d]{4}-[a-f\d]{4}-[a-f\d]{4}-[a-f\d]{12}$").unwrap()
    })
}

/// UUID with optional dashes (hex form)
pub fn uuid_hex_ok() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-f\d]{8}-?[a-f\d]{4}-?[a-f\d]{4}-?[a-f\d]{4}-?[a-f\d]{12}$").unwrap()
    })
}

/// Four dot separated digit groups; octet bounds are checked by the caller
pub fn shallow_ip_v4() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+$").unwrap())
}

pub fn ip_v6() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^([a-f\d]{0,4}:){7}[a-f\d]{0,4}$").unwrap())
}

pub fn credit_card(card_type: &str) -> Option<&'static Regex> {
    static CARDS: OnceLock<Vec<Regex>> = OnceLock::new();
    let cards = CARDS.get_or_init(|| {
        [
            r"^(4\d{12}(?:\d{3})?)$",
            r"^(5[1-5]\d{14})$",
            r"^(3[47]\d{13})$",
            r"^(3(?:0[0-5]|[68]\d)\d{11})$",
            r"^(6(?:011|5\d{2})\d{12})$",
            r"^((?:2131|1800|35\d{3})\d{11})$",
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
    });
    CREDIT_CARD_TYPES
        .iter()
        .position(|t| *t == card_type)
        .and_then(|i| cards.get(i))
}

// ============ Text structure ============

/// Signed integer, decimal or exponent notation
pub fn number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([+\-]?)((\d+)(\.\d+)?([eE]\d+)?|\.\d+)$").unwrap())
}

/// Text wrapped in braces or brackets
pub fn json_wrapper() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)^\s*[\[{]\s*(.*)\s*[\}\]]\s*$").unwrap())
}

/// HTML elements with their content, comments and doctypes
pub fn html() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ims)((<([a-z]+:)?[a-z]+[^>]*/?>)(.*?(</([a-z]+:)?[a-z]+>))?|<!--.*-->|<!doctype.*>)")
            .unwrap()
    })
}

/// HTML tags only, leaving element content in place
pub fn html_tag_only() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ims)(<([a-z]+:)?[a-z]+[^>]*/?>|</([a-z]+:)?[a-z]+>|<!--.*-->|<!doctype.*>)")
            .unwrap()
    })
}

pub fn words_count() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W*[^\W_]+\W*").unwrap())
}

pub fn spaces() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s").unwrap())
}

pub fn no_letters_or_numbers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\d]+|_+").unwrap())
}

/// Leading horizontal whitespace of every line
pub fn margin() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[^\S\r\n]+").unwrap())
}

// ============ Matching ============

/// Named entries of the catalog, for callers that pick a pattern at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Url,
    Email,
    Uuid,
    IpV6,
    Number,
    Html,
    CamelCase,
}

impl Pattern {
    /// Whether the pattern matches anywhere in `text`
    pub fn is_match(self, text: &str) -> bool {
        match self {
            Pattern::Url => fancy_is_match(urls(), text),
            Pattern::Email => emails().is_match(text),
            Pattern::Uuid => uuid().is_match(text),
            Pattern::IpV6 => ip_v6().is_match(text),
            Pattern::Number => number().is_match(text),
            Pattern::Html => html().is_match(text),
            Pattern::CamelCase => camel_case_test().is_match(text),
        }
    }
}

/// Runtime failures of the backtracking engine count as no match
pub fn fancy_is_match(re: &FancyRegex, text: &str) -> bool {
    re.is_match(text).unwrap_or_else(|e| {
        warn!(error = %e, "pattern match aborted");
        false
    })
}

/// Non-overlapping match spans, left to right
pub fn find_spans(re: &FancyRegex, text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    for m in re.find_iter(text) {
        match m {
            Ok(m) => spans.push(m.start()..m.end()),
            Err(e) => {
                warn!(error = %e, "pattern scan aborted");
                break;
            }
        }
    }
    spans
}

pub fn find_all_urls(text: &str) -> Vec<&str> {
    find_spans(urls(), text).into_iter().map(|r| &text[r]).collect()
}

pub fn find_all_emails(text: &str) -> Vec<&str> {
    emails().find_iter(text).map(|m| m.as_str()).collect()
}

/// Replace every non-overlapping match with the output of `replace`
pub fn replace_all<F>(re: &FancyRegex, text: &str, mut replace: F) -> Result<String, fancy_regex::Error>
where
    F: FnMut(&Captures) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let caps = caps?;
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&text[last..m.start()]);
        out.push_str(&replace(&caps));
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}
