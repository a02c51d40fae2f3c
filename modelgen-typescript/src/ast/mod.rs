//! TypeScript AST builders for model classes, interfaces and enums.
//!
//! Each node renders itself through a [`RenderContext`]; an entity with a
//! blank name renders to the empty string and is dropped by its container.

mod class;
mod decorator;
mod enums;
mod imports;
mod interface;
mod method;
mod property;
mod shape;

pub use class::Class;
pub use decorator::{Decorator, DecoratorOption};
pub use enums::{Enum, EnumItem};
pub use imports::{Import, render_imports};
pub use interface::Interface;
pub use method::Method;
pub use property::Property;
pub use shape::{Shape, Shaped};

use crate::RenderContext;

/// Trait for nodes that render to source text.
pub trait Render {
    fn render(&self, ctx: &RenderContext) -> String;
}

/// A top-level declaration that carries its own import list.
pub trait Declaration: Render {
    fn name(&self) -> &str;

    /// Imports declared alongside this node.
    fn imports(&self) -> &[Import];
}

/// Render every node and join the results, dropping empty renders.
pub(crate) fn render_all<'a, T, I>(nodes: I, ctx: &RenderContext) -> String
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ctx.format().join(nodes.into_iter().map(|n| n.render(ctx)))
}
