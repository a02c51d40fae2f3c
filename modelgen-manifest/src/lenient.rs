//! Serde helpers for fields that hold verbatim source text.
//!
//! Values such as property defaults or enum values end up pasted into the
//! generated code, so a definition may spell them as strings, numbers or
//! booleans. All of them are carried as their textual form.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        match text {
            Text::String(s) => s,
            Text::Integer(i) => i.to_string(),
            Text::Unsigned(u) => u.to_string(),
            Text::Float(f) => f.to_string(),
            Text::Bool(b) => b.to_string(),
        }
    }
}

/// Deserialize a string, number or boolean as text.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Text::deserialize(deserializer).map(String::from)
}

/// Deserialize an optional string, number or boolean as text.
pub fn option_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Text>::deserialize(deserializer)?.map(String::from))
}

/// Deserialize a list of strings, numbers or booleans as text.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<Text>::deserialize(deserializer)?
        .into_iter()
        .map(String::from)
        .collect())
}
