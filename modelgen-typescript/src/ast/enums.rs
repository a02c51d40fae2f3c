//! TypeScript enum builder.

use modelgen_codegen::{is_blank, non_blank};
use modelgen_manifest::EnumDef;

use super::{Declaration, Import, Render};
use crate::RenderContext;

/// A member of an enum: `Name` or `Name = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    pub name: String,
    pub value: Option<String>,
}

impl EnumItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Render for EnumItem {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        match non_blank(&self.value) {
            Some(value) => {
                let sp = ctx.format().space();
                format!("{}{sp}={sp}{value}", self.name)
            }
            None => self.name.clone(),
        }
    }
}

/// Builder for TypeScript enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    name: String,
    items: Vec<EnumItem>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Add an auto-numbered member.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.items.push(EnumItem::new(name));
        self
    }

    /// Add a member with an explicit value.
    pub fn member_with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(EnumItem::new(name).value(value));
        self
    }

    pub fn items(&self) -> &[EnumItem] {
        &self.items
    }
}

impl Render for Enum {
    fn render(&self, ctx: &RenderContext) -> String {
        if is_blank(&self.name) {
            return String::new();
        }
        let fmt = ctx.format();
        let separator = format!(",{}", fmt.newline());
        let items = self
            .items
            .iter()
            .map(|item| item.render(ctx))
            .filter(|item| !is_blank(item))
            .map(|item| format!("{}{item}", fmt.tab()))
            .collect::<Vec<_>>()
            .join(separator.as_str());

        fmt.join([
            format!("export enum {}{}{{", self.name, fmt.space()),
            items,
            "}".to_string(),
        ])
    }
}

impl Declaration for Enum {
    fn name(&self) -> &str {
        &self.name
    }

    fn imports(&self) -> &[Import] {
        &[]
    }
}

impl From<&EnumDef> for Enum {
    /// Pair names with values by position; missing values are empty.
    fn from(def: &EnumDef) -> Self {
        let items = def
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| EnumItem {
                name: name.clone(),
                value: def.values.get(i).cloned(),
            })
            .collect();
        Self {
            name: def.name.clone(),
            items,
        }
    }
}
