//! Reserved words of the generated host language
//!
//! Generated bindings are F#, so a normalized name that collides with an F#
//! keyword (or an identifier F# reserves for future use) cannot be emitted
//! verbatim. F# accepts apostrophes inside identifiers, which gives a cheap
//! disambiguation marker: `type` becomes `type'`.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Marker appended to identifiers that collide with a reserved word
pub const KEYWORD_ESCAPE: char = '\'';

/// F# keywords, OCaml-compatibility keywords and reserved identifiers
const FSHARP_RESERVED: &[&str] = &[
    // Keywords
    "abstract", "and", "as", "assert", "base", "begin", "class", "default", "delegate", "do",
    "done", "downcast", "downto", "elif", "else", "end", "exception", "extern", "false",
    "finally", "fixed", "for", "fun", "function", "global", "if", "in", "inherit", "inline",
    "interface", "internal", "lazy", "let", "match", "member", "module", "mutable", "namespace",
    "new", "not", "null", "of", "open", "or", "override", "private", "public", "rec", "return",
    "select", "sig", "static", "struct", "then", "to", "true", "try", "type", "upcast", "use",
    "val", "void", "when", "while", "with", "yield", "const",
    // OCaml compatibility
    "asr", "land", "lor", "lsl", "lsr", "lxor", "mod",
    // Reserved for future use
    "break", "checked", "component", "constraint", "continue", "event", "external", "include",
    "mixin", "parallel", "process", "protected", "pure", "sealed", "tailcall", "trait",
    "virtual",
];

/// Process-wide reserved word set, built on first access and never mutated
pub static RESERVED_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FSHARP_RESERVED.iter().copied().collect());

/// Check whether `name` is exactly a reserved word
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(name)
}

/// Append [`KEYWORD_ESCAPE`] when `name` is reserved, otherwise return it unchanged
pub fn escape_keyword(mut name: String) -> String {
    if is_reserved(&name) {
        name.push(KEYWORD_ESCAPE);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_lookup() {
        assert!(is_reserved("type"));
        assert!(is_reserved("component"));
        assert!(is_reserved("default"));
        assert!(!is_reserved("Type"));
        assert!(!is_reserved("typed"));
        assert!(!is_reserved(""));
    }

    #[test]
    fn test_escape_keyword() {
        assert_eq!(escape_keyword("open".to_string()), "open'");
        assert_eq!(escape_keyword("opened".to_string()), "opened");
        assert_eq!(escape_keyword(String::new()), "");
    }

    #[test]
    fn test_reserved_words_are_plain_lowercase() {
        // Every entry must survive the case-conversion stages untouched
        for word in RESERVED_WORDS.iter() {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected character in reserved word {word:?}"
            );
        }
    }
}
