//! Generation options.

use serde::Deserialize;

/// Options controlling a generation run.
///
/// Read from the `options` table of a definition. The indentation width is
/// fixed for the whole run once a generator is built from these options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Emit human-formatted text instead of compact text
    pub prettify: bool,
    /// Indent width in spaces
    pub tab_size: u8,
    /// Field assigned the class name in synthesized constructors
    pub class_name: Option<String>,
    /// Dirty-marker field set by tracked setters
    pub is_dirty: String,
    /// Timestamp field set by tracked setters
    pub last_updated: String,
    /// Omit type annotations on field declarations that have a default value
    pub infer_type: bool,
}

impl Options {
    /// Default options with compact output.
    pub fn compact() -> Self {
        Self {
            prettify: false,
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prettify: true,
            tab_size: 4,
            class_name: None,
            is_dirty: "_isDirty".to_string(),
            last_updated: "_lastUpdated".to_string(),
            infer_type: false,
        }
    }
}
