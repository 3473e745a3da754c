use serde::Deserialize;
use weft_core::{Asset, Date, EntryId, Link, Model, RawAsset, Resolver};

use super::{Author, Category};
use crate::Entry;

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    pub id: EntryId,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub tags: Vec<String>,
    pub featured_image: Asset,
    pub date: Option<Date>,
    pub comments: bool,
    pub approver: Author,
    pub author: Vec<Author>,
    /// An author or another post.
    pub byline: Option<Entry>,
    pub category: Vec<Category>,
    pub related: Vec<Entry>,
}

/// Wire form of a post's fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostFields {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub tags: Vec<String>,
    pub featured_image: Option<Link>,
    pub date: Option<Date>,
    pub comments: bool,
    pub approver: Option<Link>,
    pub author: Vec<Link>,
    pub byline: Option<Link>,
    pub category: Vec<Link>,
    pub related: Vec<Link>,
}

impl Model for Post {
    const CONTENT_TYPE: &'static str = "post";
    type Fields = PostFields;

    fn materialize(id: &EntryId, fields: &PostFields, assets: &[RawAsset]) -> Self {
        Self {
            id: id.clone(),
            title: fields.title.clone(),
            slug: fields.slug.clone(),
            body: fields.body.clone(),
            tags: fields.tags.clone(),
            featured_image: weft_core::asset::resolve_asset(fields.featured_image.as_ref(), assets),
            date: fields.date,
            comments: fields.comments,
            ..Default::default()
        }
    }

    fn link(id: &EntryId, fields: &PostFields, resolver: &mut Resolver<'_>) {
        let approver = resolver.resolve_value::<Author>(fields.approver.as_ref());
        resolver.update::<Post>(id, |post| post.approver = approver);

        let author = resolver.resolve_values::<Author>(&fields.author);
        resolver.update::<Post>(id, |post| post.author = author);

        let byline = resolver.resolve_polymorphic::<Entry>(fields.byline.as_ref());
        resolver.update::<Post>(id, |post| post.byline = byline);

        let category = resolver.resolve_values::<Category>(&fields.category);
        resolver.update::<Post>(id, |post| post.category = category);

        let related = resolver.resolve_polymorphic_many::<Entry>(&fields.related);
        resolver.update::<Post>(id, |post| post.related = related);
    }
}
