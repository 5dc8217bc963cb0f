//! Binding constructor interface
//!
//! The safe builders never construct bindings themselves. They hand
//! validated arguments to an implementation of [`BindingPrimitives`], which
//! decides what a prop overload, a prop or a component actually is.

use crate::builder::CodeFragment;
use crate::ident::Identifier;

/// The four base constructors of a binding generator.
///
/// Implementations may assume every [`Identifier`] is normalized and every
/// [`CodeFragment`] is already wrapped for its syntactic position.
pub trait BindingPrimitives {
    /// Overload built from a parameter list and a value expression
    type RegularOverload;
    /// Overload selecting a fixed enum value
    type EnumOverload;
    /// A prop mapping a native property name to a member name
    type Prop;
    /// A component imported from a JS module
    type Component;

    /// Create an overload from `(params)` and `(value)` fragments
    fn regular_prop_overload(
        &self,
        params: &CodeFragment,
        value: &CodeFragment,
    ) -> Self::RegularOverload;

    /// Create an enum overload named `method_name` emitting `value`
    fn enum_prop_overload(&self, method_name: &Identifier, value: &CodeFragment)
        -> Self::EnumOverload;

    /// Create a prop for the native property `real_name`
    fn prop(&self, real_name: &str, method_name: &Identifier) -> Self::Prop;

    /// Create a component imported from `import_path`
    fn component(
        &self,
        method_name: &Identifier,
        import_path: &str,
        import_selector: Option<&str>,
    ) -> Self::Component;
}
