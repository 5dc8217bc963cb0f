//! Identifier normalization pipeline
//!
//! Turns scraped, possibly hostile text (API method names, enum literal
//! text) into a lowerCamelCase identifier that can be emitted as a member
//! name in generated bindings.
//!
//! The pipeline is a fixed sequence of pure `String -> String` stages. The
//! order is part of the contract: each stage assumes the shape the previous
//! one produced (the snake/kebab conversions, for example, rely on the
//! space conversion having already removed every space).
//!
//! | # | Stage | Effect |
//! |---|-------|--------|
//! | 1 | `strip_control` | drop ESC and non-whitespace control characters |
//! | 2 | `newlines_to_spaces` | `\r\n`, `\n`, `\r` become a space |
//! | 3 | `collapse_whitespace` | any whitespace run becomes one space |
//! | 4 | `space_case_to_camel` | `on Click` -> `onClick` |
//! | 5 | `snake_case_to_camel` | `aria_label` -> `ariaLabel` |
//! | 6 | `kebab_case_to_camel` | `data-testid` -> `dataTestid` |
//! | 7 | `remove_question_marks` | `isActive?` -> `isActive` |
//! | 8 | `escape_keyword` | `type` -> `type'` |

use crate::ident::keywords;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

type Stage = fn(String) -> String;

/// Normalization stages in execution order
const PIPELINE: &[(&str, Stage)] = &[
    ("strip_control", strip_control),
    ("newlines_to_spaces", newlines_to_spaces),
    ("collapse_whitespace", collapse_whitespace),
    ("space_case_to_camel", space_case_to_camel),
    ("snake_case_to_camel", snake_case_to_camel),
    ("kebab_case_to_camel", kebab_case_to_camel),
    ("remove_question_marks", remove_question_marks),
    ("escape_keyword", keywords::escape_keyword),
];

const ESCAPE: char = '\u{1b}';

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize raw text into an identifier.
///
/// Total over all strings. Empty or all-whitespace input yields an empty
/// string; guarding against emitting an empty name is the caller's job.
///
/// ```
/// use weld_ident::normalize_identifier;
///
/// assert_eq!(normalize_identifier("on Click"), "onClick");
/// assert_eq!(normalize_identifier("is active?"), "isActive");
/// assert_eq!(normalize_identifier("type"), "type'");
/// ```
pub fn normalize_identifier(raw: &str) -> String {
    PIPELINE
        .iter()
        .fold(raw.to_owned(), |text, &(stage, apply)| {
            let text = apply(text);
            trace!(stage, output = %text, "normalize");
            text
        })
}

fn strip_control(text: String) -> String {
    // Whitespace controls are kept; stages 2-3 turn them into word breaks
    text.chars()
        .filter(|&c| c != ESCAPE && !(c.is_control() && !c.is_whitespace()))
        .collect()
}

fn newlines_to_spaces(text: String) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn collapse_whitespace(text: String) -> String {
    WHITESPACE_RUN.replace_all(&text, " ").into_owned()
}

fn space_case_to_camel(text: String) -> String {
    let joined: String = text.split(' ').map(capitalize_first).collect();
    lower_first_letter(joined)
}

fn snake_case_to_camel(text: String) -> String {
    join_camel(text, '_')
}

fn kebab_case_to_camel(text: String) -> String {
    join_camel(text, '-')
}

fn remove_question_marks(text: String) -> String {
    text.replace('?', "")
}

/// Split on `separator`, capitalize every token after the first and join.
/// Input without the separator passes through unchanged.
fn join_camel(text: String, separator: char) -> String {
    if !text.contains(separator) {
        return text;
    }

    let joined: String = text
        .split(separator)
        .enumerate()
        .map(|(i, token)| {
            if i == 0 {
                token.to_owned()
            } else {
                capitalize_first(token)
            }
        })
        .collect();

    // A leading separator leaves an empty head token
    lower_first_letter(joined)
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(token.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Lower-case the first ASCII letter, skipping leading digits, punctuation
/// and non-ASCII characters, which have no case folding here
fn lower_first_letter(mut text: String) -> String {
    if let Some(pos) = text.find(|c: char| c.is_ascii_alphabetic()) {
        text[pos..pos + 1].make_ascii_lowercase();
    }
    text
}
