//! Generation entry point.

use std::borrow::Cow;

use modelgen_codegen::{ImportCollector, is_blank};
use modelgen_manifest::{Definition, Options};
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    RenderContext,
    ast::{Class, Declaration, Enum, Interface, Render, render_imports},
};

/// Result of a generation run: the assembled source plus the manifest of
/// externally visible names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Generated {
    /// Class names, excluding base classes
    pub classes: Vec<String>,
    pub enums: Vec<String>,
    pub interfaces: Vec<String>,
    /// The assembled TypeScript source
    #[serde(skip)]
    pub output: String,
}

/// Holds the enums, interfaces and classes of one generation run, in
/// declaration order.
///
/// # Example
///
/// ```
/// use modelgen_manifest::Options;
/// use modelgen_typescript::{Generator, ast::{Class, Enum, Property, Shaped}};
///
/// let generated = Generator::new(Options::compact())
///     .enumeration(Enum::new("Role").member("Admin"))
///     .class(Class::new("User").property(Property::new("id").ty("number")))
///     .generate();
///
/// assert_eq!(generated.classes, ["User"]);
/// assert_eq!(
///     generated.output,
///     "export enum Role{Admin}export class User{public id:number;}"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    ctx: RenderContext,
    enums: Vec<Enum>,
    interfaces: Vec<Interface>,
    classes: Vec<Class>,
}

impl Generator {
    pub fn new(options: Options) -> Self {
        Self {
            ctx: RenderContext::new(&options),
            enums: Vec::new(),
            interfaces: Vec::new(),
            classes: Vec::new(),
        }
    }

    pub fn from_definition(def: &Definition) -> Self {
        Self {
            enums: def.enums.iter().map(Enum::from).collect(),
            interfaces: def.interfaces.iter().map(Interface::from).collect(),
            classes: def.classes.iter().map(Class::from).collect(),
            ..Self::new(def.options.clone())
        }
    }

    pub fn enumeration(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }

    pub fn interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    /// Render everything and collect the manifest.
    ///
    /// Once a base model has been declared, every later class that is not
    /// itself a base model renders with clone and export capability forced
    /// on, whatever its own flags say.
    pub fn generate(&self) -> Generated {
        let ctx = &self.ctx;
        let fmt = ctx.format();
        let mut generated = Generated::default();
        let mut imports = ImportCollector::new();
        let mut blocks = Vec::new();

        for e in &self.enums {
            debug!(kind = "enum", name = e.name(), "rendering");
            push_name(&mut generated.enums, e.name());
            blocks.push(e.render(ctx));
        }

        for interface in &self.interfaces {
            debug!(kind = "interface", name = interface.name(), "rendering");
            push_name(&mut generated.interfaces, interface.name());
            blocks.push(interface.render(ctx));
            collect_imports(&mut imports, interface);
        }

        let mut seen_base_model = false;
        for class in &self.classes {
            debug!(kind = "class", name = class.name(), "rendering");
            if !class.is_base_class() {
                push_name(&mut generated.classes, class.name());
            }
            seen_base_model |= class.is_base_model();

            let class = if seen_base_model && !class.is_base_model() {
                debug!(
                    name = class.name(),
                    "base model declared earlier, forcing clone and export"
                );
                Cow::Owned(class.clone().cloneable(true).exportable(true))
            } else {
                Cow::Borrowed(class)
            };
            blocks.push(class.render(ctx));
            collect_imports(&mut imports, &*class);
        }

        trace!(
            enums = generated.enums.len(),
            interfaces = generated.interfaces.len(),
            classes = generated.classes.len(),
            import_paths = imports.len(),
            "assembling output"
        );
        generated.output = fmt.join([render_imports(&imports, fmt), fmt.join(blocks)]);
        generated
    }
}

impl From<&Definition> for Generator {
    fn from(def: &Definition) -> Self {
        Self::from_definition(def)
    }
}

fn push_name(names: &mut Vec<String>, name: &str) {
    if !is_blank(name) {
        names.push(name.to_string());
    }
}

fn collect_imports(imports: &mut ImportCollector, node: &impl Declaration) {
    for import in node.imports() {
        imports.add(&import.path, &import.name);
    }
}
