//! Per-run render settings.

use modelgen_codegen::{Format, Indent, non_blank};
use modelgen_manifest::Options;

/// Everything a render call needs besides the entity itself.
///
/// Built once per generation run from [`Options`] and passed by reference
/// into every render call, so entities never hold formatting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    format: Format,
    dirty_field: String,
    updated_field: String,
    discriminator: Option<String>,
    infer_type: bool,
}

impl RenderContext {
    pub fn new(options: &Options) -> Self {
        Self {
            format: Format::new(options.prettify, Indent(options.tab_size)),
            dirty_field: options.is_dirty.clone(),
            updated_field: options.last_updated.clone(),
            discriminator: non_blank(&options.class_name).map(str::to_string),
            infer_type: options.infer_type,
        }
    }

    /// Default options, human-formatted.
    pub fn pretty() -> Self {
        Self::new(&Options::default())
    }

    /// Default options, compact.
    pub fn compact() -> Self {
        Self::new(&Options::compact())
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Field a tracked setter marks dirty.
    pub fn dirty_field(&self) -> &str {
        &self.dirty_field
    }

    /// Field a tracked setter stamps with the current time.
    pub fn updated_field(&self) -> &str {
        &self.updated_field
    }

    /// Field assigned the class name in synthesized constructors.
    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }

    pub fn infer_type(&self) -> bool {
        self.infer_type
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::pretty()
    }
}
