//! Code generation for F# bindings
//!
//! This module provides:
//! - `FSharpPrimitives`: the binding constructors the safe builders delegate to
//! - `FSharpGenerator`: renders a `BindingModule` as an F# source file

pub mod fsharp;
pub mod primitives;

pub use fsharp::FSharpGenerator;
pub use primitives::FSharpPrimitives;
