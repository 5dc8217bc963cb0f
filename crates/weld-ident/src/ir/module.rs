//! Module metadata for generated bindings
//!
//! A `BindingModule` is one generated F# file: a namespace and the
//! components it declares.

use crate::ir::Component;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Metadata for an entire generated binding file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingModule {
    /// F# namespace (e.g. "Feliz.MaterialUI")
    pub namespace: String,

    /// All components in this module
    pub components: Vec<Component>,

    /// Module documentation
    pub doc: Option<String>,
}

impl BindingModule {
    /// Create a new module
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            components: Vec::new(),
            doc: None,
        }
    }

    /// Add a component
    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Set components
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Set documentation
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Serialize the module as pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Validate the module before generation.
    ///
    /// Normalization never fails, but it can collapse distinct raw names to
    /// the same member (or to nothing); those collisions surface here.
    pub fn validate(&self) -> Result<(), ModuleValidationError> {
        if self.namespace.trim().is_empty() {
            return Err(ModuleValidationError::EmptyNamespace);
        }

        let mut seen_components = HashSet::new();
        for component in &self.components {
            if component.method_name.is_empty() {
                return Err(ModuleValidationError::EmptyComponentName(
                    component.import_path.clone(),
                ));
            }
            if !seen_components.insert(component.method_name.as_str()) {
                return Err(ModuleValidationError::DuplicateComponent(
                    component.method_name.to_string(),
                ));
            }

            let mut seen_props = HashSet::new();
            for prop in &component.props {
                if prop.method_name.is_empty() {
                    return Err(ModuleValidationError::EmptyPropName {
                        component: component.method_name.to_string(),
                        real_name: prop.real_name.clone(),
                    });
                }
                if !seen_props.insert(prop.method_name.as_str()) {
                    return Err(ModuleValidationError::DuplicateProp {
                        component: component.method_name.to_string(),
                        prop: prop.method_name.to_string(),
                    });
                }

                let mut seen_values = HashSet::new();
                for overload in &prop.enum_overloads {
                    if overload.method_name.is_empty()
                        || !seen_values.insert(overload.method_name.as_str())
                    {
                        return Err(ModuleValidationError::DuplicateEnumValue {
                            prop: prop.method_name.to_string(),
                            value: overload.method_name.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Errors that can occur during module validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleValidationError {
    /// Namespace is empty
    #[error("module namespace cannot be empty")]
    EmptyNamespace,
    /// Component name normalized to nothing
    #[error("component imported from {0} has an empty name")]
    EmptyComponentName(String),
    /// Two components share a member name
    #[error("duplicate component: {0}")]
    DuplicateComponent(String),
    /// Prop name normalized to nothing
    #[error("prop {real_name} of {component} has an empty name")]
    EmptyPropName { component: String, real_name: String },
    /// Two props of one component share a member name
    #[error("duplicate prop {prop} in component {component}")]
    DuplicateProp { component: String, prop: String },
    /// Two enum values of one prop share a member name, or one is empty
    #[error("duplicate or empty enum value {value:?} in prop {prop}")]
    DuplicateEnumValue { prop: String, value: String },
}
