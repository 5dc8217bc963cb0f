//! Safe builders over [`BindingPrimitives`]
//!
//! Every name passed through a [`SafeBuilder`] is normalized and every value
//! is wrapped for its position before the underlying constructor sees it.
//! None of the builders fail: malformed input is corrected, not rejected.

use crate::builder::{BindingPrimitives, CodeFragment, Literal};
use crate::ident::Identifier;
use tracing::debug;

/// Validation and formatting layer in front of a binding generator
#[derive(Debug, Clone, Default)]
pub struct SafeBuilder<P> {
    primitives: P,
}

impl<P: BindingPrimitives> SafeBuilder<P> {
    /// Wrap a primitives implementation
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }

    /// Build an overload from a parameter list and a value expression.
    ///
    /// Both snippets are parenthesized independently, so a multi-token
    /// expression can never be parsed ambiguously at the call position.
    pub fn make_overload_from_expressions(
        &self,
        params_code: &str,
        value_code: &str,
    ) -> P::RegularOverload {
        let params = CodeFragment::parenthesized(params_code);
        let value = CodeFragment::parenthesized(value_code);
        self.primitives.regular_prop_overload(&params, &value)
    }

    /// Build an enum overload.
    ///
    /// The method name is normalized. A value that parses as a base-10
    /// integer is emitted bare in canonical form, anything else as a quoted
    /// string literal.
    pub fn make_enum_overload(&self, method_name: &str, value: &str) -> P::EnumOverload {
        let ident = normalized(method_name);
        let literal = Literal::classify(value);
        if !literal.is_integer() {
            debug!(value, "enum value quoted as string literal");
        }
        self.primitives.enum_prop_overload(&ident, &literal.to_code())
    }

    /// Build a prop. The real name is a protocol string and passes verbatim.
    pub fn make_prop(&self, real_name: &str, method_name: &str) -> P::Prop {
        let ident = normalized(method_name);
        self.primitives.prop(real_name, &ident)
    }

    /// Build a component. Import path and selector pass verbatim.
    pub fn make_component(
        &self,
        method_name: &str,
        import_path: &str,
        import_selector: Option<&str>,
    ) -> P::Component {
        let ident = normalized(method_name);
        self.primitives
            .component(&ident, import_path, import_selector)
    }
}

fn normalized(raw: &str) -> Identifier {
    let ident = Identifier::normalize(raw);
    if ident.as_str() != raw {
        debug!(raw, ident = %ident, escaped = ident.is_escaped(), "method name normalized");
    }
    ident
}
