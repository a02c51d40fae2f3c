//! Members shared by classes and interfaces.

use modelgen_codegen::non_blank;

use super::{Import, Method, Property};

/// Name, supertype, members and imports common to classes and interfaces.
///
/// Lists render in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub name: String,
    pub extends: Option<String>,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
    pub imports: Vec<Import>,
}

impl Shape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The supertype, if one is set and non-blank.
    pub fn supertype(&self) -> Option<&str> {
        non_blank(&self.extends)
    }

    /// ` extends Super`, or nothing.
    pub(crate) fn extends_clause(&self) -> String {
        self.supertype()
            .map(|s| format!(" extends {s}"))
            .unwrap_or_default()
    }
}

/// Builder methods for anything built on a [`Shape`].
pub trait Shaped: Sized {
    fn shape(&self) -> &Shape;

    fn shape_mut(&mut self) -> &mut Shape;

    /// Set the supertype.
    fn extends(mut self, name: impl Into<String>) -> Self {
        self.shape_mut().extends = Some(name.into());
        self
    }

    fn property(mut self, property: Property) -> Self {
        self.shape_mut().properties.push(property);
        self
    }

    fn method(mut self, method: Method) -> Self {
        self.shape_mut().methods.push(method);
        self
    }

    /// Declare an import emitted in the grouped preamble.
    fn import(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.shape_mut().imports.push(Import::new(name, path));
        self
    }
}
