//! Code generation building blocks.
//!
//! - [`Format`] - Immutable whitespace tokens passed into every render call
//! - [`Indent`] - Indentation configuration

mod format;
mod indent;

pub use format::Format;
pub use indent::Indent;

/// Check whether a fragment is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Borrow an optional string only when it carries non-blank text.
pub fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !is_blank(s))
}
