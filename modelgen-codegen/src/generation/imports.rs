//! Import collection utilities.

use indexmap::IndexMap;

/// Groups imported symbols by the module path they come from.
///
/// Paths keep the order in which they were first seen and symbols keep
/// insertion order within a path. Duplicate symbols are kept as given.
///
/// # Example
///
/// ```
/// use modelgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./base", "Model");
/// imports.add("./util", "Utils");
/// imports.add("./base", "Tracked");
///
/// let grouped: Vec<_> = imports.iter().collect();
/// assert_eq!(grouped[0].0, "./base");
/// assert_eq!(grouped[0].1, ["Model", "Tracked"]);
/// assert_eq!(grouped[1].0, "./util");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> symbols in insertion order
    imports: IndexMap<String, Vec<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .push(symbol.to_string());
    }

    /// Iterate over all imports grouped by module, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
