//! Safe binding builders
//!
//! This module provides:
//! - `CodeFragment`/`Literal`: wrapped code snippets and enum value classification
//! - `BindingPrimitives`: the constructors a binding generator must supply
//! - `SafeBuilder`: the validation layer that feeds those constructors

pub mod fragment;
pub mod primitives;
pub mod safe;

pub use fragment::{CodeFragment, Literal};
pub use primitives::BindingPrimitives;
pub use safe::SafeBuilder;
