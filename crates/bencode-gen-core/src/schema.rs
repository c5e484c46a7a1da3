//! Raw schema layer: a 1:1 mapping of the JSON schema file.
//!
//! Nothing here is validated beyond JSON shape. Name resolution, type
//! expression parsing and declaration checks happen during lowering in the
//! compiler crate.

use serde::Deserialize;

/// Top-level schema document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSchema {
    /// Module path recorded in generated file headers.
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub types: Vec<RawTypeDecl>,
}

/// One declared type.
///
/// Exactly one of `fields` (a struct body) or `body` (a type expression) is
/// expected, except for opaque native types which may have neither.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTypeDecl {
    pub name: String,
    #[serde(rename = "struct")]
    pub fields: Option<Vec<RawField>>,
    #[serde(rename = "type")]
    pub body: Option<String>,
    /// The type writes its own encoding.
    #[serde(default)]
    pub native: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Contents of the field's `bencode` tag, if it has one.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub embedded: bool,
}

/// Deserialize a schema document.
pub fn parse_schema(json: &str) -> Result<RawSchema, serde_json::Error> {
    serde_json::from_str(json)
}

impl RawSchema {
    pub fn find(&self, name: &str) -> Option<&RawTypeDecl> {
        self.types.iter().find(|decl| decl.name == name)
    }
}
