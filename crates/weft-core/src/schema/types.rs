//! Content type and field definitions as returned by the content API.

use serde::{Deserialize, Serialize};

use crate::types::{ContentTypeId, LinkType};

/// A content type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeSchema {
    #[serde(with = "sys_id")]
    #[serde(rename = "sys")]
    pub id: ContentTypeId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_field: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl ContentTypeSchema {
    /// The display name normalized into a type name: whitespace removed,
    /// first letter capitalized ("blog post" becomes "Blogpost").
    pub fn type_name(&self) -> String {
        let compact: String = self.name.chars().filter(|c| !c.is_whitespace()).collect();
        let mut chars = compact.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => self.id.to_string(),
        }
    }

    /// Look up a field by ID.
    pub fn field(&self, id: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Primitive field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `Symbol` and `Text`.
    Text,
    Integer,
    Number,
    Boolean,
    Date,
    /// `Object`, `Location`, `RichText` and any type this client does not model.
    Json,
}

impl PrimitiveKind {
    fn from_api(name: &str) -> Self {
        match name {
            "Symbol" | "Text" => Self::Text,
            "Integer" => Self::Integer,
            "Number" => Self::Number,
            "Boolean" => Self::Boolean,
            "Date" => Self::Date,
            _ => Self::Json,
        }
    }
}

/// The target of a link field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    Asset,
    /// An entry link, with the content types its validations allow.
    /// Empty means unconstrained.
    Entry { targets: Vec<ContentTypeId> },
}

/// The element kind of an array field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Primitive(PrimitiveKind),
    Link(LinkKind),
}

/// The declared kind of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(PrimitiveKind),
    Link(LinkKind),
    Array(ItemKind),
}

/// A field definition within a content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawField", into = "RawField")]
pub struct FieldSchema {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub localized: bool,
    pub required: bool,
    pub disabled: bool,
    pub omitted: bool,
}

impl FieldSchema {
    /// Create a field with all flags cleared.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            localized: false,
            required: false,
            disabled: false,
            omitted: false,
        }
    }
}

/// Wire form of a field definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link_type: Option<LinkType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<RawItems>,
    #[serde(default)]
    validations: Vec<RawValidation>,
    #[serde(default)]
    localized: bool,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    omitted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItems {
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link_type: Option<LinkType>,
    #[serde(default)]
    validations: Vec<RawValidation>,
}

/// Only `linkContentType` matters here; other validations are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawValidation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    link_content_type: Vec<String>,
}

fn link_kind(link_type: Option<LinkType>, validations: &[RawValidation]) -> LinkKind {
    match link_type {
        Some(LinkType::Asset) => LinkKind::Asset,
        _ => {
            let mut targets: Vec<ContentTypeId> = Vec::new();
            for id in validations.iter().flat_map(|v| &v.link_content_type) {
                if let Ok(id) = ContentTypeId::new(id.as_str()) {
                    if !targets.contains(&id) {
                        targets.push(id);
                    }
                }
            }
            LinkKind::Entry { targets }
        }
    }
}

fn link_parts(kind: &LinkKind) -> (Option<LinkType>, Vec<RawValidation>) {
    match kind {
        LinkKind::Asset => (Some(LinkType::Asset), Vec::new()),
        LinkKind::Entry { targets } if targets.is_empty() => (Some(LinkType::Entry), Vec::new()),
        LinkKind::Entry { targets } => (
            Some(LinkType::Entry),
            vec![RawValidation {
                link_content_type: targets.iter().map(|t| t.to_string()).collect(),
            }],
        ),
    }
}

fn primitive_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Text => "Symbol",
        PrimitiveKind::Integer => "Integer",
        PrimitiveKind::Number => "Number",
        PrimitiveKind::Boolean => "Boolean",
        PrimitiveKind::Date => "Date",
        PrimitiveKind::Json => "Object",
    }
}

impl From<RawField> for FieldSchema {
    fn from(raw: RawField) -> Self {
        let kind = match raw.field_type.as_str() {
            "Link" => FieldKind::Link(link_kind(raw.link_type, &raw.validations)),
            "Array" => {
                let items = raw.items.unwrap_or_default();
                if items.item_type == "Link" {
                    FieldKind::Array(ItemKind::Link(link_kind(items.link_type, &items.validations)))
                } else {
                    FieldKind::Array(ItemKind::Primitive(PrimitiveKind::from_api(&items.item_type)))
                }
            }
            other => FieldKind::Primitive(PrimitiveKind::from_api(other)),
        };

        Self {
            id: raw.id,
            name: raw.name,
            kind,
            localized: raw.localized,
            required: raw.required,
            disabled: raw.disabled,
            omitted: raw.omitted,
        }
    }
}

impl From<FieldSchema> for RawField {
    fn from(field: FieldSchema) -> Self {
        let mut raw = RawField {
            id: field.id,
            name: field.name,
            localized: field.localized,
            required: field.required,
            disabled: field.disabled,
            omitted: field.omitted,
            ..Default::default()
        };

        match &field.kind {
            FieldKind::Primitive(kind) => raw.field_type = primitive_name(*kind).to_string(),
            FieldKind::Link(kind) => {
                raw.field_type = "Link".to_string();
                (raw.link_type, raw.validations) = link_parts(kind);
            }
            FieldKind::Array(ItemKind::Primitive(kind)) => {
                raw.field_type = "Array".to_string();
                raw.items = Some(RawItems {
                    item_type: primitive_name(*kind).to_string(),
                    ..Default::default()
                });
            }
            FieldKind::Array(ItemKind::Link(kind)) => {
                raw.field_type = "Array".to_string();
                let (link_type, validations) = link_parts(kind);
                raw.items = Some(RawItems {
                    item_type: "Link".to_string(),
                    link_type,
                    validations,
                });
            }
        }

        raw
    }
}

/// (De)serializes a content type ID through its `sys` block.
mod sys_id {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::types::ContentTypeId;

    #[derive(Serialize, Deserialize)]
    struct Sys {
        id: ContentTypeId,
    }

    pub fn serialize<S: Serializer>(id: &ContentTypeId, serializer: S) -> Result<S::Ok, S::Error> {
        Sys { id: id.clone() }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ContentTypeId, D::Error> {
        Ok(Sys::deserialize(deserializer)?.id)
    }
}
