use serde::Deserialize;
use weft_core::{Asset, EntryId, Link, Model, RawAsset, Resolver};

use super::Post;

/// A post author.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Author {
    pub id: EntryId,
    pub name: String,
    pub website: String,
    pub profile_photo: Asset,
    pub biography: String,
    pub age: i64,
    pub rating: f64,
    pub created_entries: Vec<Post>,
}

/// Wire form of an author's fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorFields {
    pub name: String,
    pub website: String,
    pub profile_photo: Option<Link>,
    pub biography: String,
    pub age: i64,
    pub rating: f64,
    pub created_entries: Vec<Link>,
}

impl Model for Author {
    const CONTENT_TYPE: &'static str = "author";
    type Fields = AuthorFields;

    fn materialize(id: &EntryId, fields: &AuthorFields, assets: &[RawAsset]) -> Self {
        Self {
            id: id.clone(),
            name: fields.name.clone(),
            website: fields.website.clone(),
            profile_photo: weft_core::asset::resolve_asset(fields.profile_photo.as_ref(), assets),
            biography: fields.biography.clone(),
            age: fields.age,
            rating: fields.rating,
            created_entries: Vec::new(),
        }
    }

    fn link(id: &EntryId, fields: &AuthorFields, resolver: &mut Resolver<'_>) {
        let created_entries = resolver.resolve_values::<Post>(&fields.created_entries);
        resolver.update::<Author>(id, |author| author.created_entries = created_entries);
    }
}
