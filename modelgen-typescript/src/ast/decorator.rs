//! Class decorators.

use modelgen_codegen::is_blank;
use modelgen_manifest::DecoratorDef;

use super::Render;
use crate::RenderContext;

/// One `name: value` entry of a decorator's option object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorOption {
    pub name: String,
    pub value: String,
}

/// A call-style annotation such as `@Entity({ table: 'users' })`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    ty: String,
    options: Vec<DecoratorOption>,
}

impl Decorator {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            options: Vec::new(),
        }
    }

    /// Append an option entry.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(DecoratorOption {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

impl Render for Decorator {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.ty) {
            return String::new();
        }
        let fmt = ctx.format();
        let last = self.options.len().saturating_sub(1);
        let entries = self
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| {
                let sep = if i < last { "," } else { "" };
                format!("{}{}:{}{}{sep}", fmt.tab(), o.name, fmt.space(), o.value)
            })
            .collect::<Vec<_>>()
            .join(fmt.newline());
        // compact output needs a separator before the class keyword
        let close = if fmt.is_pretty() { "})" } else { "}) " };

        fmt.join([format!("@{}({{", self.ty), entries, close.to_string()])
    }
}

impl From<&DecoratorDef> for Decorator {
    fn from(def: &DecoratorDef) -> Self {
        def.options
            .iter()
            .fold(Self::new(&def.ty), |d, o| d.option(&o.name, &o.value))
    }
}
