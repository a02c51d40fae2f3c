//! Output aggregation shared across renderers.

mod imports;

pub use imports::ImportCollector;
