//! F# binding file generator
//!
//! Generates Feliz-style erased types: one `type` per component with a
//! member per prop overload, one `module` per component holding the
//! fixed-value overloads, and a `Components` type with the element
//! constructors.

use crate::builder::CodeFragment;
use crate::ir::{BindingModule, Component, Prop};

/// Generator for F# binding files
pub struct FSharpGenerator<'a> {
    module: &'a BindingModule,
}

impl<'a> FSharpGenerator<'a> {
    /// Create a new F# generator for a module
    pub fn new(module: &'a BindingModule) -> Self {
        Self { module }
    }

    /// Generate the complete .fs source
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("// Generated by weld - do not edit\n\n");

        if let Some(ref doc) = self.module.doc {
            push_doc(&mut output, doc, "");
        }
        output.push_str(&format!("namespace {}\n\n", self.module.namespace));
        output.push_str("open Fable.Core\nopen Fable.Core.JsInterop\nopen Feliz\n\n");

        for component in &self.module.components {
            output.push_str(&self.generate_prop_type(component));
            output.push('\n');

            if component.enum_props().next().is_some() {
                output.push_str(&self.generate_enum_module(component));
                output.push('\n');
            }
        }

        output.push_str(&self.generate_components_type());
        output
    }

    /// Generate the erased type holding a component's prop members
    fn generate_prop_type(&self, component: &Component) -> String {
        let mut output = String::new();

        if let Some(ref doc) = component.doc {
            push_doc(&mut output, doc, "");
        }
        output.push_str("[<Erase>]\n");
        output.push_str(&format!("type {} =\n", component.method_name));

        let mut members = 0;
        for prop in &component.props {
            for overload in &prop.regular_overloads {
                if let Some(doc) = overload.doc.as_ref().or(prop.doc.as_ref()) {
                    push_doc(&mut output, doc, "  ");
                }
                output.push_str(&format!(
                    "  static member inline {}{} = Interop.mkAttr {} {}\n",
                    prop.method_name,
                    overload.params_code,
                    real_name_literal(prop),
                    overload.value_code
                ));
                members += 1;
            }
        }

        if members == 0 {
            output.push_str("  class end\n");
        }

        output
    }

    /// Generate the module of fixed-value overloads for a component
    fn generate_enum_module(&self, component: &Component) -> String {
        let mut output = String::new();

        output.push_str(&format!("module {} =\n", component.method_name));

        for prop in component.enum_props() {
            if let Some(ref doc) = prop.doc {
                push_doc(&mut output, doc, "  ");
            }
            output.push_str("  [<Erase>]\n");
            output.push_str(&format!("  type {} =\n", prop.method_name));

            for overload in &prop.enum_overloads {
                if let Some(ref doc) = overload.doc {
                    push_doc(&mut output, doc, "    ");
                }
                output.push_str(&format!(
                    "    static member inline {} = Interop.mkAttr {} {}\n",
                    overload.method_name,
                    real_name_literal(prop),
                    overload.value_code
                ));
            }
        }

        output
    }

    /// Generate the element constructors for every component
    fn generate_components_type(&self) -> String {
        let mut output = String::new();

        output.push_str("[<Erase>]\n");
        output.push_str("type Components =\n");

        if self.module.components.is_empty() {
            output.push_str("  class end\n");
            return output;
        }

        for component in &self.module.components {
            let import = match component.import_selector {
                Some(ref selector) => format!(
                    "import {} {}",
                    CodeFragment::quoted(selector),
                    CodeFragment::quoted(&component.import_path)
                ),
                None => format!(
                    "importDefault {}",
                    CodeFragment::quoted(&component.import_path)
                ),
            };
            output.push_str(&format!(
                "  static member inline {}(props: IReactProperty list) = Interop.reactApi.createElement({}, createObj !!props)\n",
                component.method_name, import
            ));
        }

        output
    }
}

fn real_name_literal(prop: &Prop) -> CodeFragment {
    CodeFragment::quoted(&prop.real_name)
}

fn push_doc(output: &mut String, doc: &str, indent: &str) {
    for line in doc.lines() {
        output.push_str(&format!("{}/// {}\n", indent, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SafeBuilder;
    use pretty_assertions::assert_eq;

    fn sample_module() -> BindingModule {
        let builder = SafeBuilder::fsharp();

        let variant = builder
            .make_prop("variant", "variant")
            .with_doc("The variant to use.")
            .enum_overload(builder.make_enum_overload("contained", "contained"))
            .enum_overload(builder.make_enum_overload("Outlined", "outlined"));
        let elevation = builder
            .make_prop("elevation", "elevation")
            .overload(builder.make_overload_from_expressions("value: int", "value"))
            .enum_overload(builder.make_enum_overload("level-2", "2"));
        let label = builder
            .make_prop("aria-label", "aria-label")
            .overload(builder.make_overload_from_expressions("value: string", "value"));

        BindingModule::new("Feliz.MaterialUI").component(
            builder
                .make_component("Button", "@material-ui/core", Some("Button"))
                .with_doc("Buttons allow users to take actions.")
                .with_props(vec![variant, elevation, label]),
        )
    }

    #[test]
    fn test_generate_header() {
        let module = sample_module();
        let output = FSharpGenerator::new(&module).generate();

        assert!(output.contains("namespace Feliz.MaterialUI\n"));
        assert!(output.contains("open Feliz\n"));
    }

    #[test]
    fn test_generate_prop_members() {
        let module = sample_module();
        let output = FSharpGenerator::new(&module).generate();

        assert!(output.contains("/// Buttons allow users to take actions.\n[<Erase>]\ntype button =\n"));
        assert!(output.contains(
            "  static member inline ariaLabel(value: string) = Interop.mkAttr \"aria-label\" (value)\n"
        ));
        assert!(output.contains(
            "  static member inline elevation(value: int) = Interop.mkAttr \"elevation\" (value)\n"
        ));
    }

    #[test]
    fn test_generate_enum_module() {
        let module = sample_module();
        let output = FSharpGenerator::new(&module).generate();

        let expected = "module button =\n\
                        \x20 /// The variant to use.\n\
                        \x20 [<Erase>]\n\
                        \x20 type variant =\n\
                        \x20   static member inline contained = Interop.mkAttr \"variant\" \"contained\"\n\
                        \x20   static member inline outlined = Interop.mkAttr \"variant\" \"outlined\"\n\
                        \x20 [<Erase>]\n\
                        \x20 type elevation =\n\
                        \x20   static member inline level2 = Interop.mkAttr \"elevation\" 2\n";
        assert!(output.contains(expected), "{output}");
    }

    #[test]
    fn test_generate_components_type() {
        let module = sample_module();
        let output = FSharpGenerator::new(&module).generate();

        assert!(output.ends_with(
            "[<Erase>]\ntype Components =\n  static member inline button(props: IReactProperty list) = Interop.reactApi.createElement(import \"Button\" \"@material-ui/core\", createObj !!props)\n"
        ));
    }

    #[test]
    fn test_component_without_members() {
        let builder = SafeBuilder::fsharp();
        let module = BindingModule::new("Lib")
            .component(builder.make_component("Spacer", "spacer-lib", None));
        let output = FSharpGenerator::new(&module).generate();

        assert!(output.contains("type spacer =\n  class end\n"));
        assert!(!output.contains("module spacer"));
        assert!(output.contains("importDefault \"spacer-lib\""));
    }

    #[test]
    fn test_empty_module() {
        let module = BindingModule::new("Empty");
        let output = FSharpGenerator::new(&module).generate();
        assert_eq!(
            output,
            "// Generated by weld - do not edit\n\n\
             namespace Empty\n\n\
             open Fable.Core\nopen Fable.Core.JsInterop\nopen Feliz\n\n\
             [<Erase>]\ntype Components =\n  class end\n"
        );
    }
}
