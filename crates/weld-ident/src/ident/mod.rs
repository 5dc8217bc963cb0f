//! Identifier normalization
//!
//! This module turns untrusted text into identifiers that are safe to emit
//! as member names in generated F# bindings.

pub mod identifier;
pub mod keywords;
pub mod normalize;

pub use identifier::Identifier;
pub use keywords::{is_reserved, KEYWORD_ESCAPE, RESERVED_WORDS};
pub use normalize::normalize_identifier;
