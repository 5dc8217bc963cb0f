//! Normalized identifier newtype

use crate::ident::keywords::KEYWORD_ESCAPE;
use crate::ident::normalize::normalize_identifier;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;

/// A name that has been through the normalization pipeline.
///
/// The only way to obtain one is [`Identifier::normalize`] (deserialization
/// normalizes too), so holding an `Identifier` means the text is free of
/// control characters, whitespace and `?`, and is keyword-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Normalize raw text into an identifier
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_identifier(raw))
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the raw text carried no identifier characters at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the name collided with a reserved word and was escaped
    pub fn is_escaped(&self) -> bool {
        self.0.ends_with(KEYWORD_ESCAPE)
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Identifier> for String {
    fn from(ident: Identifier) -> Self {
        ident.0
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accessors() {
        let ident = Identifier::normalize("disable_ripple");
        assert_eq!(ident.as_str(), "disableRipple");
        assert_eq!(ident.len(), "disableRipple".len());
        assert_eq!(ident.to_string(), "disableRipple");
        assert!(!ident.is_escaped());
        assert!(!ident.is_empty());
    }

    #[test]
    fn test_escaped_identifier() {
        let ident = Identifier::normalize("inherit");
        assert!(ident.is_escaped());
        assert_eq!(String::from(ident), "inherit'");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let ident: Identifier = serde_json::from_str("\"on Close\"").unwrap();
        assert_eq!(ident.as_str(), "onClose");

        let json = serde_json::to_string(&ident).unwrap();
        assert_eq!(json, "\"onClose\"");
    }
}
