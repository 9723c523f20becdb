//! Text manipulation: reverse, camel_case_to_snake, snake_case_to_camel,
//! shuffle, strip_html, slugify, booleanize, strip_margin, asciify

use rand::seq::SliceRandom;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use wordsmith_plugin::prelude::*;
use crate::helpers::{bool_or, get_regex, require_text, text_or};
use crate::patterns;
use crate::validate::{is_camel_case, is_full_string, is_snake_case};

pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// "ThisIsCamel" → "this_is_camel"; text that is not camel case comes back as is
pub fn camel_case_to_snake(input: &str, separator: &str) -> String {
    if !is_camel_case(input) {
        return input.to_string();
    }

    match patterns::replace_all(patterns::camel_case_replace(), input, |caps| {
        format!("{}{}", caps.get(1).map_or("", |m| m.as_str()), separator)
    }) {
        Ok(out) => out.to_lowercase(),
        Err(e) => {
            warn!(error = %e, "camel case split aborted");
            input.to_string()
        }
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_word = false;
    for c in word.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}

/// "the_snake" → "TheSnake" (or "theSnake"); text that is not snake case comes back as is
pub fn snake_case_to_camel(input: &str, upper_case_first: bool, separator: &str) -> String {
    if !is_snake_case(input, separator) {
        return input.to_string();
    }

    let mut tokens: Vec<String> = input
        .split(separator)
        .filter(|t| is_full_string(t))
        .map(title_case)
        .collect();

    if !upper_case_first {
        if let Some(first) = tokens.first_mut() {
            *first = first.to_lowercase();
        }
    }
    tokens.concat()
}

/// Same characters, random order
pub fn shuffle(input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    chars.shuffle(&mut rand::thread_rng());
    chars.into_iter().collect()
}

/// Remove HTML; elements go with their content unless `keep_tag_content`
pub fn strip_html(input: &str, keep_tag_content: bool) -> String {
    let re = if keep_tag_content { patterns::html_tag_only() } else { patterns::html() };
    re.replace_all(input, "").into_owned()
}

/// Lowercase ASCII words joined by `separator`
pub fn slugify(input: &str, separator: &str) -> String {
    let lowered = input.to_lowercase();
    let spaced = patterns::no_letters_or_numbers().replace_all(&lowered, " ");
    let joined = patterns::spaces().replace_all(spaced.trim(), separator);

    // Runs of separators collapse into one
    let slug = match get_regex(&format!("(?:{})+", regex::escape(separator))) {
        Ok(re) if !separator.is_empty() => re.replace_all(&joined, separator).into_owned(),
        _ => joined.into_owned(),
    };

    slug.nfd().filter(char::is_ascii).collect()
}

/// "true", "1", "yes" and "y" in any case are true, anything else is false
pub fn booleanize(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "true" | "1" | "yes" | "y")
}

/// Remove the leading blanks of every line
pub fn strip_margin(input: &str) -> String {
    patterns::margin().replace_all(input, "").into_owned()
}

/// Fold accented letters to ASCII and drop what has no ASCII form
pub fn asciify(input: &str) -> String {
    input.nfkd().filter(char::is_ascii).collect()
}

static TEXT_ARG: [ArgMeta; 1] = [ArgMeta::required("text", "Text", "Text to transform")];

// ============ Reverse ============

pub struct Reverse;

static REVERSE_EXAMPLES: [&str; 2] = [
    "reverse(\"hello\") → \"olleh\"",
    "reverse(\"\") → \"\"",
];

static REVERSE_RELATED: [&str; 1] = ["is_palindrome"];

impl FunctionPlugin for Reverse {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "reverse",
            description: "Reverse the characters of text",
            usage: "reverse(text)",
            args: &TEXT_ARG,
            returns: "Text",
            examples: &REVERSE_EXAMPLES,
            category: "text/manipulate",
            related: &REVERSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "reverse") {
            Ok(s) => Value::Text(reverse(s)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ CamelCaseToSnake ============

pub struct CamelCaseToSnake;

static CAMEL_CASE_TO_SNAKE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "camelCase or PascalCase text"),
    ArgMeta::optional("separator", "Text", "Word separator", "_"),
];

static CAMEL_CASE_TO_SNAKE_EXAMPLES: [&str; 2] = [
    "camel_case_to_snake(\"ThisIsACamelStringTest\") → \"this_is_a_camel_string_test\"",
    "camel_case_to_snake(\"CamelCase\", \" \") → \"camel case\"",
];

static CAMEL_CASE_TO_SNAKE_RELATED: [&str; 2] = ["snake_case_to_camel", "is_camel_case"];

impl FunctionPlugin for CamelCaseToSnake {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "camel_case_to_snake",
            description: "Convert camel case text into words joined by a separator",
            usage: "camel_case_to_snake(text, [separator])",
            args: &CAMEL_CASE_TO_SNAKE_ARGS,
            returns: "Text",
            examples: &CAMEL_CASE_TO_SNAKE_EXAMPLES,
            category: "text/manipulate",
            related: &CAMEL_CASE_TO_SNAKE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match require_text(args, "camel_case_to_snake") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        match text_or(args, 1, "_", "camel_case_to_snake", "separator") {
            Ok(sep) => Value::Text(camel_case_to_snake(text, sep)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ SnakeCaseToCamel ============

pub struct SnakeCaseToCamel;

static SNAKE_CASE_TO_CAMEL_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("text", "Text", "snake_case text"),
    ArgMeta::optional("upper_case_first", "Bool", "Uppercase the first letter", "true"),
    ArgMeta::optional("separator", "Text", "Word separator", "_"),
];

static SNAKE_CASE_TO_CAMEL_EXAMPLES: [&str; 2] = [
    "snake_case_to_camel(\"the_snake_is_green\") → \"TheSnakeIsGreen\"",
    "snake_case_to_camel(\"hello_world\", false) → \"helloWorld\"",
];

static SNAKE_CASE_TO_CAMEL_RELATED: [&str; 2] = ["camel_case_to_snake", "is_snake_case"];

impl FunctionPlugin for SnakeCaseToCamel {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "snake_case_to_camel",
            description: "Convert snake case text into camel case",
            usage: "snake_case_to_camel(text, [upper_case_first], [separator])",
            args: &SNAKE_CASE_TO_CAMEL_ARGS,
            returns: "Text",
            examples: &SNAKE_CASE_TO_CAMEL_EXAMPLES,
            category: "text/manipulate",
            related: &SNAKE_CASE_TO_CAMEL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match require_text(args, "snake_case_to_camel") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let upper_case_first = match bool_or(args, 1, true, "snake_case_to_camel", "upper_case_first") {
            Ok(b) => b,
            Err(e) => return Value::Error(e),
        };
        match text_or(args, 2, "_", "snake_case_to_camel", "separator") {
            Ok(sep) => Value::Text(snake_case_to_camel(text, upper_case_first, sep)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Shuffle ============

pub struct Shuffle;

static SHUFFLE_EXAMPLES: [&str; 1] = ["shuffle(\"hello world\") → \"lnlo hrledwo\""];

static SHUFFLE_RELATED: [&str; 1] = ["random_string"];

impl FunctionPlugin for Shuffle {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "shuffle",
            description: "Return the characters of text in random order",
            usage: "shuffle(text)",
            args: &TEXT_ARG,
            returns: "Text",
            examples: &SHUFFLE_EXAMPLES,
            category: "text/manipulate",
            related: &SHUFFLE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "shuffle") {
            Ok(s) => Value::Text(shuffle(s)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ StripHtml ============

pub struct StripHtml;

static STRIP_HTML_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Text containing HTML"),
    ArgMeta::optional("keep_tag_content", "Bool", "Keep the text inside removed elements", "false"),
];

static STRIP_HTML_EXAMPLES: [&str; 2] = [
    "strip_html(\"test: <a href=\\\"foo\\\">click here</a>\") → \"test: \"",
    "strip_html(\"test: <a href=\\\"foo\\\">click here</a>\", true) → \"test: click here\"",
];

static STRIP_HTML_RELATED: [&str; 1] = ["contains_html"];

impl FunctionPlugin for StripHtml {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "strip_html",
            description: "Remove HTML tags, with or without their content",
            usage: "strip_html(text, [keep_tag_content])",
            args: &STRIP_HTML_ARGS,
            returns: "Text",
            examples: &STRIP_HTML_EXAMPLES,
            category: "text/manipulate",
            related: &STRIP_HTML_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match require_text(args, "strip_html") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        match bool_or(args, 1, false, "strip_html", "keep_tag_content") {
            Ok(keep) => Value::Text(strip_html(text, keep)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Slugify ============

pub struct Slugify;

static SLUGIFY_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("text", "Text", "Text to turn into a slug"),
    ArgMeta::optional("separator", "Text", "Word separator", "-"),
];

static SLUGIFY_EXAMPLES: [&str; 2] = [
    "slugify(\"Top 10 Reasons To Love Dogs!!!\") → \"top-10-reasons-to-love-dogs\"",
    "slugify(\"Mönstér Mägnët\") → \"monster-magnet\"",
];

static SLUGIFY_RELATED: [&str; 2] = ["is_slug", "asciify"];

impl FunctionPlugin for Slugify {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "slugify",
            description: "Turn text into a lowercase ASCII slug",
            usage: "slugify(text, [separator])",
            args: &SLUGIFY_ARGS,
            returns: "Text",
            examples: &SLUGIFY_EXAMPLES,
            category: "text/manipulate",
            related: &SLUGIFY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let text = match require_text(args, "slugify") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        match text_or(args, 1, "-", "slugify", "separator") {
            Ok(sep) => Value::Text(slugify(text, sep)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Booleanize ============

pub struct Booleanize;

static BOOLEANIZE_EXAMPLES: [&str; 3] = [
    "booleanize(\"YES\") → true",
    "booleanize(\"1\") → true",
    "booleanize(\"nope\") → false",
];

static BOOLEANIZE_RELATED: [&str; 0] = [];

impl FunctionPlugin for Booleanize {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "booleanize",
            description: "Turn \"true\", \"1\", \"yes\" or \"y\" (any case) into true, anything else into false",
            usage: "booleanize(text)",
            args: &TEXT_ARG,
            returns: "Bool",
            examples: &BOOLEANIZE_EXAMPLES,
            category: "text/manipulate",
            related: &BOOLEANIZE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "booleanize") {
            Ok(s) => Value::Bool(booleanize(s)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ StripMargin ============

pub struct StripMargin;

static STRIP_MARGIN_EXAMPLES: [&str; 1] = [
    "strip_margin(\"  line 1\\n    line 2\") → \"line 1\\nline 2\"",
];

static STRIP_MARGIN_RELATED: [&str; 1] = ["prettify"];

impl FunctionPlugin for StripMargin {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "strip_margin",
            description: "Remove the indentation of every line",
            usage: "strip_margin(text)",
            args: &TEXT_ARG,
            returns: "Text",
            examples: &STRIP_MARGIN_EXAMPLES,
            category: "text/manipulate",
            related: &STRIP_MARGIN_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "strip_margin") {
            Ok(s) => Value::Text(strip_margin(s)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ Asciify ============

pub struct Asciify;

static ASCIIFY_EXAMPLES: [&str; 1] = ["asciify(\"èéùúòóäåëýñÅÀÁÇÌÍÑÓË\") → \"eeuuooaaeynAAACIINOE\""];

static ASCIIFY_RELATED: [&str; 1] = ["slugify"];

impl FunctionPlugin for Asciify {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "asciify",
            description: "Fold accented letters to ASCII, dropping characters with no ASCII form",
            usage: "asciify(text)",
            args: &TEXT_ARG,
            returns: "Text",
            examples: &ASCIIFY_EXAMPLES,
            category: "text/manipulate",
            related: &ASCIIFY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "asciify") {
            Ok(s) => Value::Text(asciify(s)),
            Err(e) => Value::Error(e),
        }
    }
}
