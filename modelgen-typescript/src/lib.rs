//! TypeScript model generation.
//!
//! Builds TypeScript enums, interfaces and model classes from a
//! [`Definition`](modelgen_manifest::Definition) or from the builder API in
//! [`ast`], and assembles them into a single source file with a grouped
//! import preamble.
//!
//! ```
//! use std::str::FromStr;
//!
//! use modelgen_manifest::Definition;
//! use modelgen_typescript::Generator;
//!
//! let def = Definition::from_str(r#"{
//!     "options": { "prettify": false },
//!     "enums": [{ "name": "Role", "names": ["Admin", "Guest"] }]
//! }"#).unwrap();
//!
//! let generated = Generator::from(&def).generate();
//! assert_eq!(generated.enums, ["Role"]);
//! assert_eq!(generated.output, "export enum Role{Admin,Guest}");
//! ```

pub mod analysis;
pub mod ast;
mod context;
mod generator;

pub use analysis::ClassAnalysis;
pub use ast::{Declaration, Render};
pub use context::RenderContext;
pub use generator::{Generated, Generator};
