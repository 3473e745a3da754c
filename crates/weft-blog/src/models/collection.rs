use std::sync::Arc;

use serde::Deserialize;
use weft_core::{Asset, EntryId, Link, Model, RawAsset, Resolver};

use crate::Entry;

/// A curated collection of content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub id: EntryId,
    pub title: String,
    pub cover: Asset,
    /// Any one entry.
    pub featured: Option<Entry>,
    pub children: Vec<Arc<Collection>>,
}

/// Wire form of a collection's fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionFields {
    pub title: String,
    pub cover: Option<Link>,
    pub featured: Option<Link>,
    pub children: Vec<Link>,
}

impl Model for Collection {
    const CONTENT_TYPE: &'static str = "collection";
    type Fields = CollectionFields;

    fn materialize(id: &EntryId, fields: &CollectionFields, assets: &[RawAsset]) -> Self {
        Self {
            id: id.clone(),
            title: fields.title.clone(),
            cover: weft_core::asset::resolve_asset(fields.cover.as_ref(), assets),
            ..Default::default()
        }
    }

    fn link(id: &EntryId, fields: &CollectionFields, resolver: &mut Resolver<'_>) {
        let featured = resolver.resolve_polymorphic::<Entry>(fields.featured.as_ref());
        resolver.update::<Collection>(id, |collection| collection.featured = featured);

        let children = resolver.resolve_many::<Collection>(&fields.children);
        resolver.update::<Collection>(id, |collection| collection.children = children);
    }
}
