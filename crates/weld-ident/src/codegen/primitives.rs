//! F# binding primitives
//!
//! Implements [`BindingPrimitives`] by producing IR values that
//! [`FSharpGenerator`](crate::codegen::FSharpGenerator) renders.

use crate::builder::{BindingPrimitives, CodeFragment, SafeBuilder};
use crate::ident::Identifier;
use crate::ir::{Component, EnumPropOverload, Prop, RegularPropOverload};

/// Constructors producing F# binding IR
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FSharpPrimitives;

impl BindingPrimitives for FSharpPrimitives {
    type RegularOverload = RegularPropOverload;
    type EnumOverload = EnumPropOverload;
    type Prop = Prop;
    type Component = Component;

    fn regular_prop_overload(
        &self,
        params: &CodeFragment,
        value: &CodeFragment,
    ) -> RegularPropOverload {
        RegularPropOverload::new(params.clone(), value.clone())
    }

    fn enum_prop_overload(&self, method_name: &Identifier, value: &CodeFragment) -> EnumPropOverload {
        EnumPropOverload::new(method_name.clone(), value.clone())
    }

    fn prop(&self, real_name: &str, method_name: &Identifier) -> Prop {
        Prop::new(real_name, method_name.clone())
    }

    fn component(
        &self,
        method_name: &Identifier,
        import_path: &str,
        import_selector: Option<&str>,
    ) -> Component {
        Component::new(
            method_name.clone(),
            import_path,
            import_selector.map(str::to_string),
        )
    }
}

impl SafeBuilder<FSharpPrimitives> {
    /// Safe builder producing F# binding IR
    pub fn fsharp() -> Self {
        SafeBuilder::new(FSharpPrimitives)
    }
}
