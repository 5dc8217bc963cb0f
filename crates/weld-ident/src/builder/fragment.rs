//! Code fragments and literal classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// A syntactically complete snippet of generated code.
///
/// Fragments are produced already wrapped for their position (parenthesized
/// expression, quoted string, bare number) and are never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeFragment(String);

impl CodeFragment {
    /// Wrap an expression or parameter list in parentheses
    pub fn parenthesized(code: &str) -> Self {
        Self(format!("({})", code))
    }

    /// Render text as a double-quoted F# string literal
    pub fn quoted(text: &str) -> Self {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('"');
        for c in text.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                _ => out.push(c),
            }
        }
        out.push('"');
        Self(out)
    }

    /// Render an integer as a bare decimal literal
    pub fn integer(value: i64) -> Self {
        Self(value.to_string())
    }

    /// Borrow the code text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An enum value classified for emission
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    /// Base-10 integer, emitted bare in canonical form
    Integer(i64),
    /// Anything else, emitted as a quoted string
    Text(String),
}

impl Literal {
    /// Classify a raw enum value.
    ///
    /// Surrounding ASCII whitespace is ignored when looking for an integer;
    /// a sign and leading zeros are accepted and dropped from the canonical
    /// rendering. Values that do not fit in an `i64` stay text.
    pub fn classify(raw: &str) -> Self {
        match raw.trim_matches(|c: char| c.is_ascii_whitespace()).parse::<i64>() {
            Ok(value) => Literal::Integer(value),
            Err(_) => Literal::Text(raw.to_owned()),
        }
    }

    /// Check if this is a numeric literal
    pub fn is_integer(&self) -> bool {
        matches!(self, Literal::Integer(_))
    }

    /// Render the literal as a code fragment
    pub fn to_code(&self) -> CodeFragment {
        match self {
            Literal::Integer(value) => CodeFragment::integer(*value),
            Literal::Text(text) => CodeFragment::quoted(text),
        }
    }
}
