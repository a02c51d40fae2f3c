//! Whitespace tokens shared by every render call.

use super::{Indent, is_blank};

/// Immutable formatting context.
///
/// In pretty mode the tokens are a newline, a single space and one indent
/// unit. In compact mode all three collapse to the empty string, so the same
/// composition logic produces both layouts. Renderers must compose output
/// from these tokens only, never from literal whitespace.
///
/// # Example
///
/// ```
/// use modelgen_codegen::{Format, Indent};
///
/// let pretty = Format::pretty(Indent(2));
/// assert_eq!(pretty.join(["a", "", "b"]), "a\nb");
///
/// let compact = Format::compact();
/// assert_eq!(compact.join(["a", " ", "b"]), "ab");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pretty: bool,
    newline: &'static str,
    space: &'static str,
    comma: &'static str,
    tab: String,
}

impl Format {
    /// Create the tokens for the given mode.
    pub fn new(pretty: bool, indent: Indent) -> Self {
        if pretty {
            Self::pretty(indent)
        } else {
            Self::compact()
        }
    }

    /// Human-readable output with the given indent unit.
    pub fn pretty(indent: Indent) -> Self {
        Self {
            pretty: true,
            newline: "\n",
            space: " ",
            comma: ", ",
            tab: indent.unit(),
        }
    }

    /// Minimal output: every token is empty.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            newline: "",
            space: "",
            comma: ",",
            tab: String::new(),
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn newline(&self) -> &str {
        self.newline
    }

    pub fn space(&self) -> &str {
        self.space
    }

    /// One indent unit.
    pub fn tab(&self) -> &str {
        &self.tab
    }

    /// Indentation `level` units deep.
    pub fn indent(&self, level: usize) -> String {
        self.tab.repeat(level)
    }

    /// A list separator: `,` followed by the space token.
    pub fn comma(&self) -> &str {
        self.comma
    }

    /// Separator placed between joined fragments.
    pub fn separator(&self) -> &str {
        if self.pretty { self.newline } else { self.space }
    }

    /// Join fragments, dropping empty or whitespace-only ones.
    ///
    /// This is the one place where empty renders disappear from their
    /// container.
    pub fn join<I, S>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        fragments
            .into_iter()
            .filter(|f| !is_blank(f.as_ref()))
            .map(|f| f.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::pretty(Indent::default())
    }
}
