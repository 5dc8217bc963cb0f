use crate::manifest::{ComponentConfig, Manifest, PropConfig};
use weld_ident::{BindingModule, Component, FSharpPrimitives, Prop, SafeBuilder};

/// Build the binding module a manifest describes.
///
/// Every name goes through the safe builders; nothing from the manifest
/// reaches the IR unnormalized.
pub fn build_module(manifest: &Manifest) -> BindingModule {
    let builder = SafeBuilder::fsharp();

    let components = manifest
        .components
        .iter()
        .map(|c| build_component(&builder, c))
        .collect();

    let module = BindingModule::new(&manifest.output.namespace).with_components(components);
    match manifest.output.doc {
        Some(ref doc) => module.with_doc(doc),
        None => module,
    }
}

fn build_component(builder: &SafeBuilder<FSharpPrimitives>, config: &ComponentConfig) -> Component {
    let mut component = builder.make_component(
        &config.name,
        &config.import_path,
        config.import_selector.as_deref(),
    );
    if let Some(ref doc) = config.doc {
        component = component.with_doc(doc);
    }

    let props = config
        .props
        .iter()
        .map(|p| build_prop(builder, p))
        .collect();
    component.with_props(props)
}

fn build_prop(builder: &SafeBuilder<FSharpPrimitives>, config: &PropConfig) -> Prop {
    let mut prop = builder.make_prop(&config.real_name, config.raw_method_name());
    if let Some(ref doc) = config.doc {
        prop = prop.with_doc(doc);
    }

    for overload in &config.overloads {
        let mut built = builder.make_overload_from_expressions(&overload.params, &overload.value);
        if let Some(ref doc) = overload.doc {
            built = built.with_doc(doc);
        }
        prop = prop.overload(built);
    }

    for value in &config.enum_values {
        let mut built = builder.make_enum_overload(value.raw_method_name(), &value.value);
        if let Some(ref doc) = value.doc {
            built = built.with_doc(doc);
        }
        prop = prop.enum_overload(built);
    }

    prop
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weld_ident::FSharpGenerator;

    const MANIFEST: &str = r#"
[output]
namespace = "Feliz.MaterialUI"

[[components]]
name = "Icon Button"
import_path = "@material-ui/core"
import_selector = "IconButton"

[[components.props]]
real_name = "edge"
enum_values = [{ value = "start" }, { value = "end" }, { value = "false?" }]

[[components.props]]
real_name = "type"
overloads = [{ params = "value: string", value = "value" }]

[[components.props]]
real_name = "tab-index"
overloads = [{ params = "value: int", value = "value" }]
enum_values = [{ method = "Value-1", value = "42" }, { method = "auto", value = "auto" }]
"#;

    #[test]
    fn test_build_module_normalizes_everything() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let module = build_module(&manifest);
        assert!(module.validate().is_ok());

        let button = &module.components[0];
        assert_eq!(button.method_name.as_str(), "iconButton");

        let names: Vec<&str> = button.props.iter().map(|p| p.method_name.as_str()).collect();
        assert_eq!(names, ["edge", "type'", "tabIndex"]);

        let edge: Vec<(&str, &str)> = button.props[0]
            .enum_overloads
            .iter()
            .map(|o| (o.method_name.as_str(), o.value_code.as_str()))
            .collect();
        assert_eq!(
            edge,
            [
                ("start", "\"start\""),
                ("end'", "\"end\""),
                ("false'", "\"false?\""),
            ]
        );
    }

    #[test]
    fn test_generated_source() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let module = build_module(&manifest);
        let source = FSharpGenerator::new(&module).generate();

        assert!(source.contains(
            "  static member inline type'(value: string) = Interop.mkAttr \"type\" (value)\n"
        ));
        assert!(source.contains("    static member inline value1 = Interop.mkAttr \"tab-index\" 42\n"));
        assert!(source.contains("    static member inline auto = Interop.mkAttr \"tab-index\" \"auto\"\n"));
    }
}
