//! Weld-Ident: identifier normalization and safe binding builders
//!
//! Scraped API names and enum literal text are hostile input for a code
//! generator. This crate normalizes them into lowerCamelCase, keyword-safe
//! identifiers and wraps the binding constructors so that every name and
//! literal they receive is well-formed.
//!
//! # Architecture
//!
//! - `ident`: the normalization pipeline and the reserved word set
//! - `builder`: code fragments, the `BindingPrimitives` interface and `SafeBuilder`
//! - `ir`: props, overloads, components and modules produced for F#
//! - `codegen`: F# primitives and the binding file generator
//!
//! # Usage
//!
//! ```rust
//! use weld_ident::{BindingModule, FSharpGenerator, SafeBuilder};
//!
//! let builder = SafeBuilder::fsharp();
//! let variant = builder
//!     .make_prop("variant", "variant")
//!     .enum_overload(builder.make_enum_overload("contained", "contained"));
//! let button = builder
//!     .make_component("Button", "@material-ui/core", Some("Button"))
//!     .prop(variant);
//!
//! let module = BindingModule::new("Feliz.MaterialUI").component(button);
//! let source = FSharpGenerator::new(&module).generate();
//! assert!(source.contains("static member inline contained"));
//! ```

pub mod builder;
pub mod codegen;
pub mod ident;
pub mod ir;

// Re-export commonly used types
pub use builder::{BindingPrimitives, CodeFragment, Literal, SafeBuilder};
pub use codegen::{FSharpGenerator, FSharpPrimitives};
pub use ident::{is_reserved, normalize_identifier, Identifier, KEYWORD_ESCAPE, RESERVED_WORDS};
pub use ir::{
    BindingModule, Component, EnumPropOverload, ModuleValidationError, Prop, RegularPropOverload,
};
