//! Class methods and interface method signatures.

use modelgen_codegen::is_blank;
use modelgen_manifest::{MethodDef, Modifier};

use super::{Property, Render};
use crate::RenderContext;

/// A typed method.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    ty: String,
    args: Vec<Property>,
    body: String,
    is_static: bool,
    is_abstract: bool,
    modifier: Modifier,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: "void".to_string(),
            args: Vec::new(),
            body: "return;".to_string(),
            is_static: false,
            is_abstract: false,
            modifier: Modifier::Public,
        }
    }

    /// Set the return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn arg(mut self, arg: Property) -> Self {
        self.args.push(arg);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Render as a bodiless abstract signature.
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Render as an interface member: `name(params): type;`.
    pub fn render_member(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let fmt = ctx.format();
        let params = self
            .args
            .iter()
            .map(|a| a.render_param(ctx))
            .filter(|a| !is_blank(a))
            .collect::<Vec<_>>()
            .join(fmt.comma());
        format!(
            "{}{}({params}):{}{};",
            fmt.tab(),
            self.name,
            fmt.space(),
            self.ty
        )
    }
}

impl Render for Method {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let fmt = ctx.format();
        let (sp, tab) = (fmt.space(), fmt.tab());
        let abstract_kw = if self.is_abstract { "abstract " } else { "" };
        let static_kw = if self.is_static { " static" } else { "" };
        let args = self
            .args
            .iter()
            .map(|a| a.render_arg(ctx))
            .filter(|a| !is_blank(a))
            .collect::<Vec<_>>()
            .join(fmt.comma());
        let signature = format!(
            "{tab}{abstract_kw}{}{static_kw} {}({args}):{sp}{}",
            self.modifier, self.name, self.ty
        );

        if self.is_abstract {
            return format!("{signature};");
        }

        fmt.join([
            format!("{signature}{sp}{{"),
            format!("{}{}", fmt.indent(2), self.body),
            format!("{tab}}}"),
        ])
    }
}

impl From<&MethodDef> for Method {
    fn from(def: &MethodDef) -> Self {
        Self {
            name: def.name.clone(),
            ty: def.ty.clone(),
            args: def.args.iter().map(Property::from).collect(),
            body: def.body.clone(),
            is_static: def.is_static,
            is_abstract: def.is_abstract,
            modifier: def.modifier.clone(),
        }
    }
}
