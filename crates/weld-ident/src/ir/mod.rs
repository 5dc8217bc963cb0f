//! Intermediate Representation (IR) for generated bindings
//!
//! This module provides the metadata structures produced by the F#
//! primitives: prop overloads, props, components and whole modules.

pub mod module;
pub mod symbol;

pub use module::*;
pub use symbol::*;
