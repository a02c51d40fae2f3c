//! Indentation configuration for generated code.

/// Indentation unit for generated code: a run of spaces of the given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 4-space indentation, the generator default.
    pub const DEFAULT: Self = Self(4);

    /// Build the string for one indent level.
    pub fn unit(&self) -> String {
        " ".repeat(usize::from(self.0))
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}
