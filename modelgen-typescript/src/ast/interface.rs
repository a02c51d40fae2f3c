//! TypeScript interface builder.

use modelgen_codegen::is_blank;
use modelgen_manifest::InterfaceDef;

use super::{Declaration, Import, Method, Property, Render, Shape, Shaped};
use crate::RenderContext;

/// An interface: property members then method signatures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interface {
    shape: Shape,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shape: Shape::new(name),
        }
    }
}

impl Shaped for Interface {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }
}

impl Render for Interface {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.shape.name) {
            return String::new();
        }
        let fmt = ctx.format();
        let properties = fmt.join(self.shape.properties.iter().map(|p| p.render_member(ctx)));
        let methods = fmt.join(self.shape.methods.iter().map(|m| m.render_member(ctx)));

        fmt.join([
            format!(
                "export interface {}{}{}{{",
                self.shape.name,
                self.shape.extends_clause(),
                fmt.space()
            ),
            properties,
            methods,
            "}".to_string(),
        ])
    }
}

impl Declaration for Interface {
    fn name(&self) -> &str {
        &self.shape.name
    }

    fn imports(&self) -> &[Import] {
        &self.shape.imports
    }
}

impl From<&InterfaceDef> for Interface {
    fn from(def: &InterfaceDef) -> Self {
        Self {
            shape: Shape {
                name: def.name.clone(),
                extends: def.extends.clone(),
                properties: def.properties.iter().map(Property::from).collect(),
                methods: def.methods.iter().map(Method::from).collect(),
                imports: def.import.iter().map(Import::from).collect(),
            },
        }
    }
}
