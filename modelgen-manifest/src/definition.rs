//! Definition tree types.
//!
//! Every field is optional in the source document. Absent fields take the
//! defaults listed on each type and unknown keys are ignored.

use serde::Deserialize;

use crate::{Options, lenient};

/// Root of a model definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Definition {
    /// Generation options
    pub options: Options,
    /// Enums, rendered first
    pub enums: Vec<EnumDef>,
    /// Interfaces, rendered after enums
    pub interfaces: Vec<InterfaceDef>,
    /// Classes, rendered last in declaration order
    pub classes: Vec<ClassDef>,
}

/// Access modifier for class members.
///
/// Any other text (`readonly`, `public readonly`) is kept verbatim and a
/// blank modifier falls back to `public`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Modifier {
    #[default]
    Public,
    Protected,
    Private,
    Custom(String),
}

impl Modifier {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Custom(text) => text,
        }
    }
}

impl From<String> for Modifier {
    fn from(text: String) -> Self {
        match text.trim() {
            "" | "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            _ => Self::Custom(text),
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed field, constructor argument or method parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyDef {
    pub name: String,
    /// Type annotation (default `any`)
    #[serde(rename = "type")]
    pub ty: String,
    /// Default value, pasted verbatim
    #[serde(deserialize_with = "lenient::option_text")]
    pub value: Option<String>,
    pub optional: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    /// Emit a getter in accessor mode (default true)
    pub read: bool,
    /// Emit a setter in accessor mode (default true)
    pub write: bool,
    /// Emit the field or backing field declaration (default true)
    pub declare: bool,
    pub modifier: Modifier,
    pub can_clone: bool,
    pub can_export: bool,
    pub can_undo: bool,
    /// Turn on change tracking in the synthesized setter
    pub track: bool,
    /// Set the dirty marker in a tracked setter (default true)
    pub track_state: bool,
    /// Set the last-updated timestamp in a tracked setter (default true)
    pub track_date: bool,
    pub getter_body: Option<String>,
    pub setter_body: Option<String>,
}

impl Default for PropertyDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            ty: "any".to_string(),
            value: None,
            optional: false,
            is_static: false,
            read: true,
            write: true,
            declare: true,
            modifier: Modifier::Public,
            can_clone: true,
            can_export: true,
            can_undo: true,
            track: false,
            track_state: true,
            track_date: true,
            getter_body: None,
            setter_body: None,
        }
    }
}

/// A method or interface method signature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MethodDef {
    pub name: String,
    /// Return type (default `void`)
    #[serde(rename = "type")]
    pub ty: String,
    pub args: Vec<PropertyDef>,
    /// Method body (default `return;`)
    pub body: String,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub is_abstract: bool,
    pub modifier: Modifier,
}

impl Default for MethodDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            ty: "void".to_string(),
            args: Vec::new(),
            body: "return;".to_string(),
            is_static: false,
            is_abstract: false,
            modifier: Modifier::Public,
        }
    }
}

/// One `name: value` entry of a decorator's option object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecoratorOptionDef {
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub value: String,
}

/// A class decorator such as `@Entity({ table: 'users' })`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecoratorDef {
    #[serde(rename = "type")]
    pub ty: String,
    pub options: Vec<DecoratorOptionDef>,
}

/// An enumeration with parallel name and value lists.
///
/// `values` may be shorter than `names`; missing values are empty and
/// produce auto-numbered members.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnumDef {
    pub name: String,
    pub names: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub values: Vec<String>,
}

/// An imported symbol and the module path it comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportDef {
    pub name: String,
    pub path: String,
}

/// An interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceDef {
    pub name: String,
    pub extends: Option<String>,
    pub import: Vec<ImportDef>,
    pub properties: Vec<PropertyDef>,
    pub methods: Vec<MethodDef>,
}

/// A class declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassDef {
    pub name: String,
    pub extends: Option<String>,
    pub import: Vec<ImportDef>,
    pub properties: Vec<PropertyDef>,
    pub methods: Vec<MethodDef>,
    /// Constructor parameters
    pub args: Vec<PropertyDef>,
    /// Arguments forwarded to `super(...)` by name
    pub super_args: Vec<PropertyDef>,
    pub implements: Vec<String>,
    pub is_abstract: bool,
    /// Scaffolding for other classes, left out of the generated manifest
    pub is_base_class: bool,
    /// Receives the synthesized clone/export/undo machinery
    pub is_base_model: bool,
    pub can_clone: bool,
    pub can_export: bool,
    pub can_undo: bool,
    /// Extra constructor body text, appended verbatim
    pub constructor_code: Option<String>,
    pub decorator: Option<DecoratorDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_defaults() {
        let p: PropertyDef = serde_json::from_str(r#"{ "name": "id" }"#).unwrap();
        assert_eq!(p.name, "id");
        assert_eq!(p.ty, "any");
        assert!(p.read && p.write && p.declare);
        assert!(p.can_clone && p.can_export && p.can_undo);
        assert!(p.track_state && p.track_date);
        assert!(!p.track && !p.optional && !p.is_static);
        assert_eq!(p.modifier, Modifier::Public);
    }

    #[test]
    fn test_property_camel_case_keys() {
        let p: PropertyDef = serde_json::from_str(
            r#"{
                "name": "title",
                "type": "string",
                "value": "''",
                "static": true,
                "modifier": "protected",
                "canClone": false,
                "trackDate": false,
                "getterBody": "return this._title;"
            }"#,
        )
        .unwrap();
        assert_eq!(p.ty, "string");
        assert_eq!(p.value.as_deref(), Some("''"));
        assert!(p.is_static);
        assert_eq!(p.modifier, Modifier::Protected);
        assert!(!p.can_clone);
        assert!(!p.track_date);
        assert_eq!(p.getter_body.as_deref(), Some("return this._title;"));
    }

    #[test]
    fn test_free_text_modifier() {
        let p: PropertyDef =
            serde_json::from_str(r#"{ "name": "id", "modifier": "public readonly" }"#).unwrap();
        assert_eq!(p.modifier, Modifier::Custom("public readonly".to_string()));

        let m: MethodDef = serde_json::from_str(r#"{ "name": "f", "modifier": "" }"#).unwrap();
        assert_eq!(m.modifier, Modifier::Public);
    }

    #[test]
    fn test_method_defaults() {
        let m: MethodDef = serde_json::from_str(r#"{ "name": "save" }"#).unwrap();
        assert_eq!(m.ty, "void");
        assert_eq!(m.body, "return;");
        assert!(!m.is_abstract && !m.is_static);
    }

    #[test]
    fn test_class_flags() {
        let c: ClassDef = serde_json::from_str(
            r#"{
                "name": "Model",
                "isBaseModel": true,
                "isBaseClass": true,
                "canClone": true,
                "superArgs": [{ "name": "data" }],
                "decorator": { "type": "Entity", "options": [{ "name": "table", "value": "'users'" }] }
            }"#,
        )
        .unwrap();
        assert!(c.is_base_model && c.is_base_class && c.can_clone);
        assert!(!c.can_export && !c.can_undo);
        assert_eq!(c.super_args[0].name, "data");
        let d = c.decorator.unwrap();
        assert_eq!(d.ty, "Entity");
        assert_eq!(d.options[0].value, "'users'");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let e: EnumDef =
            serde_json::from_str(r#"{ "name": "Color", "names": ["Red"], "colour": 1 }"#).unwrap();
        assert_eq!(e.names, ["Red"]);
        assert!(e.values.is_empty());
    }

    #[test]
    fn test_modifier_display() {
        assert_eq!(Modifier::Private.to_string(), "private");
        assert_eq!(Modifier::default().as_str(), "public");
        assert_eq!(Modifier::Custom("readonly".into()).to_string(), "readonly");
    }
}
