//! Field shape classification.
//!
//! The shape of a field decides both the layout of the materialized record
//! and which resolver variant fills it in.

use std::fmt;

use super::Schema;
use super::types::{ContentTypeSchema, FieldKind, FieldSchema, ItemKind, LinkKind, PrimitiveKind};
use crate::types::ContentTypeId;

/// Which content type(s) an entry link can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryTarget {
    /// Exactly one known target, other than the owning type.
    Unique(ContentTypeId),
    /// The only known target is the owning type itself.
    SelfRef,
    /// Zero or several known targets.
    Polymorphic,
}

/// The reference shape of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    Scalar(PrimitiveKind),
    ScalarArray(PrimitiveKind),
    Asset,
    AssetArray,
    Entry(EntryTarget),
    EntryArray(EntryTarget),
}

/// How a resolved field is laid out in its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Copied or owned value (scalars, assets, unique entry links).
    Value,
    /// Shared handle; used for self-recursive links so records stay finite.
    Reference,
    /// Tagged union over the schema's content types.
    Union,
}

impl FieldShape {
    /// Layout of a single element of this field.
    pub fn layout(&self) -> Layout {
        match self {
            Self::Entry(EntryTarget::SelfRef) | Self::EntryArray(EntryTarget::SelfRef) => {
                Layout::Reference
            }
            Self::Entry(EntryTarget::Polymorphic) | Self::EntryArray(EntryTarget::Polymorphic) => {
                Layout::Union
            }
            _ => Layout::Value,
        }
    }

    /// Returns true if the field holds a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            Self::ScalarArray(_) | Self::AssetArray | Self::EntryArray(_)
        )
    }

    /// Returns true if resolving the field may follow entry links, and so
    /// must run after the owning object is cached.
    pub fn links_entries(&self) -> bool {
        matches!(self, Self::Entry(_) | Self::EntryArray(_))
    }

    /// Rust type a record field of this shape is materialized as.
    ///
    /// `union` names the schema's polymorphic entry type.
    pub fn type_hint(&self, owner: &ContentTypeSchema, schema: &Schema, union: &str) -> String {
        let target = |target: &EntryTarget| match target {
            EntryTarget::Unique(id) => schema
                .get(id)
                .map(|ct| ct.type_name())
                .unwrap_or_else(|| id.to_string()),
            EntryTarget::SelfRef => format!("Arc<{}>", owner.type_name()),
            EntryTarget::Polymorphic => union.to_string(),
        };

        match self {
            Self::Scalar(kind) => scalar_hint(*kind).to_string(),
            Self::ScalarArray(kind) => format!("Vec<{}>", item_hint(*kind)),
            Self::Asset => "Asset".to_string(),
            Self::AssetArray => "Vec<Asset>".to_string(),
            Self::Entry(t @ EntryTarget::Unique(_)) => target(t),
            Self::Entry(t) => format!("Option<{}>", target(t)),
            Self::EntryArray(t) => format!("Vec<{}>", target(t)),
        }
    }
}

fn scalar_hint(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Text => "String",
        PrimitiveKind::Integer => "i64",
        PrimitiveKind::Number => "f64",
        PrimitiveKind::Boolean => "bool",
        PrimitiveKind::Date => "Option<Date>",
        PrimitiveKind::Json => "serde_json::Value",
    }
}

fn item_hint(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Date => "Date",
        other => scalar_hint(other),
    }
}

impl fmt::Display for EntryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique(id) => write!(f, "{}", id),
            Self::SelfRef => write!(f, "self"),
            Self::Polymorphic => write!(f, "any"),
        }
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{:?}", kind),
            Self::ScalarArray(kind) => write!(f, "[{:?}]", kind),
            Self::Asset => write!(f, "asset"),
            Self::AssetArray => write!(f, "[asset]"),
            Self::Entry(target) => write!(f, "entry -> {}", target),
            Self::EntryArray(target) => write!(f, "[entry -> {}]", target),
        }
    }
}

/// A field paired with its shape.
#[derive(Debug, Clone)]
pub struct ClassifiedField<'a> {
    pub field: &'a FieldSchema,
    pub shape: FieldShape,
}

/// Classify one field of the content type `owner`.
///
/// Validation targets that are not part of `schema` do not count. A single
/// remaining target equal to `owner` makes the link self-recursive.
pub fn classify(field: &FieldSchema, owner: &ContentTypeId, schema: &Schema) -> FieldShape {
    match &field.kind {
        FieldKind::Primitive(kind) => FieldShape::Scalar(*kind),
        FieldKind::Link(LinkKind::Asset) => FieldShape::Asset,
        FieldKind::Link(LinkKind::Entry { targets }) => {
            FieldShape::Entry(entry_target(targets, owner, schema))
        }
        FieldKind::Array(ItemKind::Primitive(kind)) => FieldShape::ScalarArray(*kind),
        FieldKind::Array(ItemKind::Link(LinkKind::Asset)) => FieldShape::AssetArray,
        FieldKind::Array(ItemKind::Link(LinkKind::Entry { targets })) => {
            FieldShape::EntryArray(entry_target(targets, owner, schema))
        }
    }
}

fn entry_target(targets: &[ContentTypeId], owner: &ContentTypeId, schema: &Schema) -> EntryTarget {
    let mut known = targets.iter().filter(|id| schema.contains(id));
    match (known.next(), known.next()) {
        (Some(only), None) if only == owner => EntryTarget::SelfRef,
        (Some(only), None) => EntryTarget::Unique(only.clone()),
        _ => EntryTarget::Polymorphic,
    }
}
