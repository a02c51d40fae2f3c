//! Model definition parsing for the modelgen code generator.
//!
//! A definition is a nested description of enums, interfaces and classes
//! plus generation [`Options`]. It can be written as JSON or TOML:
//!
//! ```
//! use std::str::FromStr;
//!
//! use modelgen_manifest::Definition;
//!
//! let def = Definition::from_str(r#"{
//!     "options": { "prettify": false },
//!     "classes": [{ "name": "User", "properties": [{ "name": "id", "type": "number" }] }]
//! }"#).unwrap();
//!
//! assert!(!def.options.prettify);
//! assert_eq!(def.classes[0].properties[0].ty, "number");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod definition;
mod error;
mod lenient;
mod options;
mod parse;

pub use definition::{
    ClassDef, DecoratorDef, DecoratorOptionDef, Definition, EnumDef, ImportDef, InterfaceDef,
    MethodDef, Modifier, PropertyDef,
};
pub use error::{Error, Result};
pub use options::Options;
pub use parse::DefinitionFormat;
