//! Definition parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Definition, Error, Result, error::SourceContext};

/// Source syntax of a definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Toml,
}

impl DefinitionFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

impl FromStr for Definition {
    type Err = Box<Error>;

    /// Parse a JSON definition.
    fn from_str(s: &str) -> Result<Self> {
        parse_definition(s, "definition.json", DefinitionFormat::Json)
    }
}

impl Definition {
    /// Parse a definition file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DefinitionFormat::from_path(path).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string(), format)
    }

    /// Parse a TOML definition.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_definition(content, "definition.toml", DefinitionFormat::Toml)
    }

    /// Parse a definition with a custom filename for error reporting.
    pub fn from_str_with_filename(
        content: &str,
        filename: &str,
        format: DefinitionFormat,
    ) -> Result<Self> {
        parse_definition(content, filename, format)
    }
}

fn parse_definition(content: &str, filename: &str, format: DefinitionFormat) -> Result<Definition> {
    let source_ctx = SourceContext::new(content, filename);
    match format {
        DefinitionFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))
        }
        DefinitionFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e)),
    }
}
