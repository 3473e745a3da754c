//! Content type schema and field shape classification.
//!
//! A [`Schema`] is fetched once and is immutable for the lifetime of a
//! resolution run. It is passed explicitly wherever it is needed.

mod classify;
mod types;

pub use classify::{ClassifiedField, EntryTarget, FieldShape, Layout, classify};
pub use types::{ContentTypeSchema, FieldKind, FieldSchema, ItemKind, LinkKind, PrimitiveKind};

use crate::types::ContentTypeId;

/// The set of content types known for one space environment.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    content_types: Vec<ContentTypeSchema>,
}

impl Schema {
    /// Create a schema from content type definitions, keeping their order.
    pub fn new(content_types: Vec<ContentTypeSchema>) -> Self {
        Self { content_types }
    }

    /// Look up a content type by ID.
    pub fn get(&self, id: &ContentTypeId) -> Option<&ContentTypeSchema> {
        self.content_types.iter().find(|ct| &ct.id == id)
    }

    /// Returns true if the schema defines the given content type.
    pub fn contains(&self, id: &ContentTypeId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over content types in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentTypeSchema> {
        self.content_types.iter()
    }

    /// Number of content types.
    pub fn len(&self) -> usize {
        self.content_types.len()
    }

    /// Returns true if the schema has no content types.
    pub fn is_empty(&self) -> bool {
        self.content_types.is_empty()
    }

    /// Classify every delivered field of a content type, in declaration order.
    ///
    /// Omitted fields never appear in delivery payloads and are skipped.
    pub fn classify_content_type<'a>(
        &'a self,
        content_type: &'a ContentTypeSchema,
    ) -> Vec<ClassifiedField<'a>> {
        content_type
            .fields
            .iter()
            .filter(|field| !field.omitted)
            .map(|field| ClassifiedField {
                field,
                shape: classify(field, &content_type.id, self),
            })
            .collect()
    }
}

impl FromIterator<ContentTypeSchema> for Schema {
    fn from_iter<I: IntoIterator<Item = ContentTypeSchema>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
