//! TypeScript class builder with optional base-model machinery.

use modelgen_codegen::{Format, is_blank, non_blank};
use modelgen_manifest::ClassDef;

use super::{
    Declaration, Decorator, Import, Method, Property, Render, Shape, Shaped, render_all,
};
use crate::{RenderContext, analysis::ClassAnalysis};

const REGISTER_PROPERTY: &str = "if (canClone) { this._clones.push(name); } \
    if (canExport) { this._exports.push(name); } \
    if (canUndo) { this.__[name] = this[name]; }";

const REGISTER_PROPERTIES: &str = "properties.forEach((p) => { \
    if (!this.isNullOrUndefined(p) && !this.isNullOrEmpty(p.name)) { \
    const n = p.name; \
    const c = this.isNullOrUndefined(p.canClone) ? true : p.canClone; \
    const e = this.isNullOrUndefined(p.canExport) ? true : p.canExport; \
    const u = this.isNullOrUndefined(p.canUndo) ? true : p.canUndo; \
    this.registerProperty(n, c, e, u); } });";

const CLONE: &str = "const o = obj || {}; \
    if (this._clones !== undefined) { this._clones.forEach((k) => { o[k] = this[k]; }); } \
    return o;";

const TO_OBJECT: &str = "const o = {}; \
    this._exports.forEach((e) => { if (this[e] !== undefined) { \
    if (this[e]['toObject'] !== undefined) { o[e] = this[e].toObject(); } \
    else { o[e] = this[e]; } } }); \
    return o;";

const PARSE_OBJECT_SNAPSHOT: &str =
    " Object.keys(data).forEach((k) => { if ((this[k] !== undefined)) { this.__[k] = this[k]; } });";

const COMMIT: &str = "if (!this.isNullOrUndefined(this.__)) { \
    Object.keys(this.__).forEach((k) => { \
    if (this[k]['commit'] !== undefined) { this[k].commit(); } \
    else { this.__[k] = this[k]; } }); }";

const REVERT: &str = "if (!this.isNullOrUndefined(this.__)) { \
    Object.keys(this.__).forEach((k) => { \
    if (this[k]['revert'] !== undefined) { this[k].revert(); } \
    else { this[k] = this.__[k]; } }); }";

/// A class declaration.
///
/// Body order: decorator, header, static fields, static methods, instance
/// fields, injected `_clones`/`_exports` fields (base models), constructor,
/// synthesized model methods (base models), instance methods.
///
/// The constructor is emitted when the class has a supertype, constructor
/// arguments, or extra constructor code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Class {
    shape: Shape,
    args: Vec<Property>,
    super_args: Vec<String>,
    implements: Vec<String>,
    is_abstract: bool,
    is_base_class: bool,
    is_base_model: bool,
    cloneable: bool,
    exportable: bool,
    undoable: bool,
    decorator: Option<Decorator>,
    constructor_code: Option<String>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shape: Shape::new(name),
            ..Self::default()
        }
    }

    /// Add a constructor argument.
    pub fn arg(mut self, arg: Property) -> Self {
        self.args.push(arg);
        self
    }

    /// Forward a constructor argument to `super(...)` by name.
    pub fn super_arg(mut self, name: impl Into<String>) -> Self {
        self.super_args.push(name.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as scaffolding for other classes (left out of the manifest).
    pub fn base_class(mut self) -> Self {
        self.is_base_class = true;
        self
    }

    /// Inject clone/export/undo machinery.
    pub fn base_model(mut self) -> Self {
        self.is_base_model = true;
        self
    }

    pub fn cloneable(mut self, cloneable: bool) -> Self {
        self.cloneable = cloneable;
        self
    }

    pub fn exportable(mut self, exportable: bool) -> Self {
        self.exportable = exportable;
        self
    }

    pub fn undoable(mut self, undoable: bool) -> Self {
        self.undoable = undoable;
        self
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorator = Some(decorator);
        self
    }

    /// Append code to the constructor body verbatim.
    pub fn constructor_code(mut self, code: impl Into<String>) -> Self {
        self.constructor_code = Some(code.into());
        self
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_base_class(&self) -> bool {
        self.is_base_class
    }

    pub fn is_base_model(&self) -> bool {
        self.is_base_model
    }

    pub fn is_cloneable(&self) -> bool {
        self.cloneable
    }

    pub fn is_exportable(&self) -> bool {
        self.exportable
    }

    pub fn is_undoable(&self) -> bool {
        self.undoable
    }

    fn header(&self, fmt: &Format) -> String {
        let abstract_kw = if self.is_abstract { " abstract" } else { "" };
        let interfaces: Vec<&str> = self
            .implements
            .iter()
            .map(String::as_str)
            .filter(|i| !is_blank(i))
            .collect();
        let implements = if interfaces.is_empty() {
            String::new()
        } else {
            format!(" implements {}", interfaces.join(fmt.comma()))
        };
        format!(
            "export{abstract_kw} class {}{}{implements}{}{{",
            self.shape.name,
            self.shape.extends_clause(),
            fmt.space()
        )
    }

    fn injected_fields(&self, analysis: &ClassAnalysis, fmt: &Format) -> [String; 2] {
        let field = |name: &str, names: &[&str]| {
            let sp = fmt.space();
            let list = if names.is_empty() {
                "[]".to_string()
            } else {
                format!("[{sp}{}{sp}]", quoted(names, fmt))
            };
            format!("{}protected {name}:{sp}string[]{sp}={sp}{list};", fmt.tab())
        };
        [
            field("_clones", &analysis.clones),
            field("_exports", &analysis.exports),
        ]
    }

    fn constructor(&self, ctx: &RenderContext, analysis: &ClassAnalysis) -> Option<String> {
        let fmt = ctx.format();
        let (sp, nl, tab) = (fmt.space(), fmt.newline(), fmt.tab());
        let inner = fmt.indent(2);
        let args = self
            .args
            .iter()
            .map(|a| a.render_arg(ctx))
            .filter(|a| !is_blank(a))
            .collect::<Vec<_>>()
            .join(fmt.comma());
        let supertype = self.shape.supertype();
        let code = non_blank(&self.constructor_code);

        if supertype.is_none() && args.is_empty() && code.is_none() {
            return None;
        }

        let mut out = format!("{tab}constructor({args}){sp}{{{nl}");
        if supertype.is_some() {
            let super_args = self
                .super_args
                .iter()
                .map(String::as_str)
                .filter(|a| !is_blank(a))
                .collect::<Vec<_>>()
                .join(fmt.comma());
            out.push_str(&format!("{inner}super({super_args});{nl}"));
            if let Some(field) = ctx.discriminator() {
                out.push_str(&format!(
                    "{inner}this.{field}{sp}={sp}'{}';{nl}",
                    self.shape.name
                ));
            }
        }
        for (field, names) in [("_clones", &analysis.clones), ("_exports", &analysis.exports)] {
            if !names.is_empty() {
                out.push_str(&format!(
                    "{inner}this.{field}{sp}={sp}[{sp}...this.{field},{sp}{}{sp}];{nl}",
                    quoted(names, fmt)
                ));
            }
        }
        if let Some(code) = code {
            out.push_str(&format!("{inner}{code}{nl}"));
        }
        out.push_str(&format!("{tab}}}"));
        Some(out)
    }

    fn model_methods(&self) -> Vec<Method> {
        let mut methods = vec![
            Method::new("registerProperty")
                .arg(Property::new("name").ty("string"))
                .arg(Property::new("canClone").ty("boolean").value("true"))
                .arg(Property::new("canExport").ty("boolean").value("true"))
                .arg(Property::new("canUndo").ty("boolean").value("true"))
                .body(REGISTER_PROPERTY),
            Method::new("registerProperties")
                .arg(Property::new("properties").ty("any[]"))
                .body(REGISTER_PROPERTIES),
        ];
        if self.cloneable {
            methods.push(
                Method::new("clone")
                    .returns("any")
                    .arg(Property::new("obj").optional())
                    .body(CLONE),
            );
        }
        if self.exportable {
            methods.push(Method::new("toObject").returns("any").body(TO_OBJECT));
        }
        let snapshot = if self.undoable { PARSE_OBJECT_SNAPSHOT } else { "" };
        methods.push(
            Method::new("parseObject")
                .arg(Property::new("data"))
                .body(format!(
                    "if (!this.isNullOrUndefined(data)) {{ Utils.parseObject(data, this);{snapshot} }}"
                )),
        );
        if self.undoable {
            methods.push(Method::new("commit").body(COMMIT));
            methods.push(Method::new("revert").body(REVERT));
        }
        methods
    }
}

/// `'a', 'b'` with the list separator of the current mode.
fn quoted(names: &[&str], fmt: &Format) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(fmt.comma())
}

impl Shaped for Class {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }
}

impl Render for Class {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.shape.name) {
            return String::new();
        }
        let fmt = ctx.format();
        let analysis = ClassAnalysis::of(self);
        let (statics, instance): (Vec<&Property>, Vec<&Property>) =
            self.shape.properties.iter().partition(|p| p.is_static());
        let (static_methods, methods): (Vec<&Method>, Vec<&Method>) =
            self.shape.methods.iter().partition(|m| m.is_static());

        let mut parts = Vec::new();
        if let Some(decorator) = &self.decorator {
            parts.push(decorator.render(ctx));
        }
        parts.push(self.header(fmt));
        parts.push(render_all(statics, ctx));
        parts.push(render_all(static_methods, ctx));
        parts.push(render_all(instance, ctx));
        if self.is_base_model {
            parts.extend(self.injected_fields(&analysis, fmt));
        }
        parts.extend(self.constructor(ctx, &analysis));
        if self.is_base_model {
            parts.push(render_all(&self.model_methods(), ctx));
        }
        parts.push(render_all(methods, ctx));
        parts.push("}".to_string());

        fmt.join(parts)
    }
}

impl Declaration for Class {
    fn name(&self) -> &str {
        &self.shape.name
    }

    fn imports(&self) -> &[Import] {
        &self.shape.imports
    }
}

impl From<&ClassDef> for Class {
    fn from(def: &ClassDef) -> Self {
        Self {
            shape: Shape {
                name: def.name.clone(),
                extends: def.extends.clone(),
                properties: def.properties.iter().map(Property::from).collect(),
                methods: def.methods.iter().map(Method::from).collect(),
                imports: def.import.iter().map(Import::from).collect(),
            },
            args: def.args.iter().map(Property::from).collect(),
            super_args: def.super_args.iter().map(|a| a.name.clone()).collect(),
            implements: def.implements.clone(),
            is_abstract: def.is_abstract,
            is_base_class: def.is_base_class,
            is_base_model: def.is_base_model,
            cloneable: def.can_clone,
            exportable: def.can_export,
            undoable: def.can_undo,
            decorator: def.decorator.as_ref().map(Decorator::from),
            constructor_code: def.constructor_code.clone(),
        }
    }
}
