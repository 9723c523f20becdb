//! Prettify pipeline
//!
//! Free text is normalized by an ordered table of rewrite rules. Each rule is
//! one pattern plus a replacement function, applied to every non-overlapping
//! match of the previous pass's output. URLs and emails are held in a
//! [`Vault`] for the duration of the passes.

use fancy_regex::{Captures, Regex as FancyRegex};
use std::sync::OnceLock;
use tracing::{debug, trace, warn};
use wordsmith_plugin::prelude::*;

use crate::helpers::require_text;
use crate::patterns::replace_all;
use crate::vault::Vault;

/// Names of the rewrite rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    UppercaseFirstLetter,
    Duplicates,
    RightSpace,
    LeftSpace,
    SpacesAround,
    SpacesInside,
    UppercaseAfterSign,
    SaxonGenitive,
}

/// One pattern and what its matches become
pub struct RewriteRule {
    pub id: RuleId,
    pub pattern: &'static FancyRegex,
    pub replace: fn(&Captures) -> String,
}

impl RewriteRule {
    /// Rewrite every match; a match failure leaves the text as it was
    pub fn apply(&self, text: &str) -> String {
        match replace_all(self.pattern, text, self.replace) {
            Ok(out) => out,
            Err(e) => {
                warn!(rule = ?self.id, error = %e, "rewrite pass skipped");
                text.to_string()
            }
        }
    }
}

/// A step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Rewrite(RuleId),
    Trim,
}

/// Pass order; later rules rely on the spacing left by earlier ones
pub const PIPELINE: [Step; 10] = [
    Step::Rewrite(RuleId::UppercaseFirstLetter),
    Step::Rewrite(RuleId::Duplicates),
    Step::Rewrite(RuleId::RightSpace),
    Step::Rewrite(RuleId::LeftSpace),
    Step::Rewrite(RuleId::SpacesAround),
    Step::Rewrite(RuleId::SpacesInside),
    Step::Rewrite(RuleId::UppercaseAfterSign),
    Step::Rewrite(RuleId::SaxonGenitive),
    Step::Trim,
    Step::Rewrite(RuleId::UppercaseFirstLetter),
];

const DUPLICATES: &str = r#"(\({2,}|\){2,}|\[{2,}|\]{2,}|\{{2,}|\}{2,}|:{2,}|,{2,}|;{2,}|\+{2,}|-{2,}|\s{2,}|%{2,}|={2,}|"{2,}|'{2,})"#;

// A sign directly followed by another sign only loses the spaces around it.
// Whitespace in front of a sign is consumed by the alternatives starting with
// `\s`, so the bare-sign alternatives only need to exclude digits and runs.
const RIGHT_SPACE: &str = concat!(
    r"(?s)",
    r"(?P<tight>\s?(?:,|;|:|\.+(?!\.)|!+(?!!)|\?+(?!\?))\s?(?=[.,;:!?%])|(?<=\d)\s?%\s?(?=[.,;:!?%]))|",
    r"(?<!\d),(?=[^\s\d.,;:!?%])|\s,\s|\s,(?=[^\s\d.,;:!?%])|\s,(?!.)|",
    r"(?<![\d.])\.+(?=[^\s\d.,;:!?%])|\s\.+\s|\s\.+(?=[^\s\d.,;:!?%])|\s\.+(?!\.)|",
    r";(?=[^\s.,;:!?%])|\s;\s|\s;(?=[^\s.,;:!?%])|\s;(?!.)|",
    r":(?=[^\s.,;:!?%])|\s:\s|\s:(?=[^\s.,;:!?%])|\s:(?!.)|",
    r"(?<!!)!+(?=[^\s.,;:!?%])|\s!+\s|\s!+(?=[^\s.,;:!?%])|\s!+(?!!)|",
    r"(?<!\?)\?+(?=[^\s.,;:!?%])|\s\?+\s|\s\?+(?=[^\s.,;:!?%])|\s\?+(?!\?)|",
    r"\d%(?=[^\s.,;:!?%])|(?<=\d)\s%\s|(?<=\d)\s%(?=[^\s.,;:!?%])|(?<=\d)\s%(?!.)",
);

const LEFT_SPACE: &str = concat!(
    r#"(?s)"#,
    r#"\s"[^"]+"(?=[?.:!,;])|(?<=\S)"[^"]+"\s|(?<=\S)"[^"]+"(?=[?.:!,;])|"#,
    r#"\s\([^)]+\)(?=[?.:!,;])|(?<=\S)\([^)]+\)\s|(?<=\S)\([^)]+\)(?=[?.:!,;])"#,
);

const SPACES_AROUND: &str = concat!(
    r#"(?s)"#,
    r#"(?<=\S)\+(?=\S)|(?<=\S)\+\s|\s\+(?=\S)|"#,
    r#"(?<=\S)-(?=\S)|(?<=\S)-\s|\s-(?=\S)|"#,
    r#"(?<=\S)/(?=\S)|(?<=\S)/\s|\s/(?=\S)|"#,
    r#"(?<=\S)\*(?=\S)|(?<=\S)\*\s|\s\*(?=\S)|"#,
    r#"(?<=\S)=(?=\S)|(?<=\S)=\s|\s=(?=\S)|"#,
    r#"\s"[^"]+"(?=[^\s?.:!,;])|(?<=\S)"[^"]+"\s|(?<=\S)"[^"]+"(?=[^\s?.:!,;])|"#,
    r#"\s\([^)]+\)(?=[^\s?.:!,;])|(?<=\S)\([^)]+\)\s|(?<=\S)\([^)]+\)(?=[^\s?.:!,;])"#,
);

// Both delimiters are part of the match, so text between two spans is never a span
const SPACES_INSIDE: &str = r#""([^"]+)"|\(([^)]+)\)"#;

const UPPERCASE_FIRST_LETTER: &str = r"^\s*\w";

const UPPERCASE_AFTER_SIGN: &str = r"[.?!]\s\w";

const SAXON_GENITIVE: &str = r"(?<=\w)'\ss\s|(?<=\w)\s's\s|(?<=\w)\s's(?=\w)|(?<=\w)\s's\s(?=\w)";

// ============ Replacements ============

fn whole<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(0).map_or("", |m| m.as_str())
}

fn uppercase_whole(caps: &Captures) -> String {
    whole(caps).to_uppercase()
}

fn first_char(caps: &Captures) -> String {
    whole(caps).chars().next().map(String::from).unwrap_or_default()
}

fn right_space_only(caps: &Captures) -> String {
    let sign = whole(caps).trim();
    if caps.name("tight").is_some() {
        sign.to_string()
    } else {
        format!("{} ", sign)
    }
}

fn left_space_only(caps: &Captures) -> String {
    format!(" {}", whole(caps).trim())
}

fn spaces_around(caps: &Captures) -> String {
    format!(" {} ", whole(caps).trim())
}

fn strip_inside(caps: &Captures) -> String {
    if let Some(quoted) = caps.get(1) {
        format!("\"{}\"", quoted.as_str().trim())
    } else if let Some(bracketed) = caps.get(2) {
        format!("({})", bracketed.as_str().trim())
    } else {
        whole(caps).to_string()
    }
}

fn uppercase_last(caps: &Captures) -> String {
    let m = whole(caps);
    let mut chars = m.chars();
    match chars.next_back() {
        Some(last) => format!("{}{}", chars.as_str(), last.to_uppercase()),
        None => String::new(),
    }
}

fn saxon_genitive(caps: &Captures) -> String {
    let mut out: String = whole(caps).chars().filter(|c| *c != ' ').collect();
    out.push(' ');
    out
}

// ============ Rule table ============

fn compiled() -> &'static [FancyRegex; 8] {
    static RE: OnceLock<[FancyRegex; 8]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            UPPERCASE_FIRST_LETTER,
            DUPLICATES,
            RIGHT_SPACE,
            LEFT_SPACE,
            SPACES_AROUND,
            SPACES_INSIDE,
            UPPERCASE_AFTER_SIGN,
            SAXON_GENITIVE,
        ]
        .map(|p| FancyRegex::new(p).unwrap())
    })
}

/// Indexed by `RuleId` discriminant
fn rules() -> &'static [RewriteRule] {
    static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let re = compiled();
        vec![
            RewriteRule { id: RuleId::UppercaseFirstLetter, pattern: &re[0], replace: uppercase_whole },
            RewriteRule { id: RuleId::Duplicates, pattern: &re[1], replace: first_char },
            RewriteRule { id: RuleId::RightSpace, pattern: &re[2], replace: right_space_only },
            RewriteRule { id: RuleId::LeftSpace, pattern: &re[3], replace: left_space_only },
            RewriteRule { id: RuleId::SpacesAround, pattern: &re[4], replace: spaces_around },
            RewriteRule { id: RuleId::SpacesInside, pattern: &re[5], replace: strip_inside },
            RewriteRule { id: RuleId::UppercaseAfterSign, pattern: &re[6], replace: uppercase_last },
            RewriteRule { id: RuleId::SaxonGenitive, pattern: &re[7], replace: saxon_genitive },
        ]
    })
}

/// The rule with the given id
pub fn rule(id: RuleId) -> &'static RewriteRule {
    &rules()[id as usize]
}

/// Apply a single rule, outside the pipeline
pub fn apply_rule(id: RuleId, text: &str) -> String {
    rule(id).apply(text)
}

/// Normalize spacing, punctuation and capitalization of free text
///
/// URLs and email addresses are left exactly as written.
pub fn prettify(input: &str) -> String {
    let (protected, vault) = Vault::protect(input);
    debug!(len = input.len(), protected = vault.len(), "prettify");

    let mut text = protected;
    for step in PIPELINE {
        text = match step {
            Step::Rewrite(id) => {
                trace!(rule = ?id, "pass");
                apply_rule(id, &text)
            }
            Step::Trim => text.trim().to_string(),
        };
    }

    vault.restore(&text)
}

// ============ Prettify ============

pub struct Prettify;

static PRETTIFY_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("text", "Text", "Text to normalize"),
];

static PRETTIFY_EXAMPLES: [&str; 3] = [
    "prettify(\" hello ,world\") → \"Hello, world\"",
    "prettify(\"5+2=7\") → \"5 + 2 = 7\"",
    "prettify(\"mail : me@site.com\") → \"Mail: me@site.com\"",
];

static PRETTIFY_RELATED: [&str; 2] = ["strip_margin", "slugify"];

impl FunctionPlugin for Prettify {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "prettify",
            description: "Normalize spacing, punctuation and capitalization, keeping URLs and emails intact",
            usage: "prettify(text)",
            args: &PRETTIFY_ARGS,
            returns: "Text",
            examples: &PRETTIFY_EXAMPLES,
            category: "text/manipulate",
            related: &PRETTIFY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        match require_text(args, "prettify") {
            Ok(s) => Value::Text(prettify(s)),
            Err(e) => Value::Error(e),
        }
    }
}
