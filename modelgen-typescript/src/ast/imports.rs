//! TypeScript import entries and the grouped import preamble.

use modelgen_codegen::{Format, ImportCollector};
use modelgen_manifest::ImportDef;

/// A single imported symbol and the module path it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub path: String,
}

impl Import {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl From<&ImportDef> for Import {
    fn from(def: &ImportDef) -> Self {
        Self::new(&def.name, &def.path)
    }
}

/// Render one `import { ... } from '...';` statement per module path.
pub fn render_imports(imports: &ImportCollector, fmt: &Format) -> String {
    let sp = fmt.space();
    fmt.join(imports.iter().map(|(path, symbols)| {
        format!(
            "import{sp}{{{sp}{}{sp}}}{sp}from{sp}'{path}';",
            symbols.join(fmt.comma())
        )
    }))
}
