//! Binding metadata for props and components
//!
//! These are the values the F# primitives produce. Names are already
//! normalized and code is already wrapped by the time they exist; the
//! generator only lays them out.

use crate::builder::CodeFragment;
use crate::ident::Identifier;
use serde::{Deserialize, Serialize};

/// Overload built from a parameter list and a value expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegularPropOverload {
    /// Parameter list, e.g. `(value: string)`
    pub params_code: CodeFragment,
    /// Value expression, e.g. `(value)`
    pub value_code: CodeFragment,
    /// Documentation comments
    pub doc: Option<String>,
}

impl RegularPropOverload {
    /// Create a new overload
    pub fn new(params_code: CodeFragment, value_code: CodeFragment) -> Self {
        Self {
            params_code,
            value_code,
            doc: None,
        }
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Overload that selects one fixed enum value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumPropOverload {
    /// Member name of the value (e.g. `contained`)
    pub method_name: Identifier,
    /// Bare number or quoted string
    pub value_code: CodeFragment,
    /// Documentation comments
    pub doc: Option<String>,
}

impl EnumPropOverload {
    /// Create a new enum overload
    pub fn new(method_name: Identifier, value_code: CodeFragment) -> Self {
        Self {
            method_name,
            value_code,
            doc: None,
        }
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A native property exposed as a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prop {
    /// Native property name, emitted verbatim (e.g. `aria-label`)
    pub real_name: String,
    /// Member name (e.g. `ariaLabel`)
    pub method_name: Identifier,
    /// Documentation comments
    pub doc: Option<String>,
    /// Overloads taking arguments
    pub regular_overloads: Vec<RegularPropOverload>,
    /// Fixed-value overloads
    pub enum_overloads: Vec<EnumPropOverload>,
}

impl Prop {
    /// Create a new prop without overloads
    pub fn new(real_name: impl Into<String>, method_name: Identifier) -> Self {
        Self {
            real_name: real_name.into(),
            method_name,
            doc: None,
            regular_overloads: Vec::new(),
            enum_overloads: Vec::new(),
        }
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an overload
    pub fn overload(mut self, overload: RegularPropOverload) -> Self {
        self.regular_overloads.push(overload);
        self
    }

    /// Add an enum overload
    pub fn enum_overload(mut self, overload: EnumPropOverload) -> Self {
        self.enum_overloads.push(overload);
        self
    }

    /// Check whether the prop has fixed-value overloads
    pub fn has_enum_overloads(&self) -> bool {
        !self.enum_overloads.is_empty()
    }
}

/// A component imported from a JS module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Member name (e.g. `iconButton`)
    pub method_name: Identifier,
    /// Module to import from (e.g. `@material-ui/core`)
    pub import_path: String,
    /// Named export; `None` imports the default export
    pub import_selector: Option<String>,
    /// Documentation comments
    pub doc: Option<String>,
    /// Props of this component
    pub props: Vec<Prop>,
}

impl Component {
    /// Create a new component
    pub fn new(
        method_name: Identifier,
        import_path: impl Into<String>,
        import_selector: Option<String>,
    ) -> Self {
        Self {
            method_name,
            import_path: import_path.into(),
            import_selector,
            doc: None,
            props: Vec::new(),
        }
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a prop
    pub fn prop(mut self, prop: Prop) -> Self {
        self.props.push(prop);
        self
    }

    /// Set props
    pub fn with_props(mut self, props: Vec<Prop>) -> Self {
        self.props = props;
        self
    }

    /// Props that carry enum overloads
    pub fn enum_props(&self) -> impl Iterator<Item = &Prop> {
        self.props.iter().filter(|p| p.has_enum_overloads())
    }
}
