//! Shared formatting primitives for the modelgen code generator.
//!
//! This crate holds the target-agnostic pieces every renderer builds on.
//!
//! # Module Organization
//!
//! - [`builder`] - Whitespace tokens, indentation and fragment joining
//! - [`generation`] - Output aggregation (ImportCollector)

pub mod builder;
pub mod generation;

pub use builder::{Format, Indent, is_blank, non_blank};
pub use generation::ImportCollector;
