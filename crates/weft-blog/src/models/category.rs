use std::sync::Arc;

use serde::Deserialize;
use weft_core::{Asset, EntryId, Link, Model, RawAsset, Resolver};

/// A post category; categories nest through `parent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub id: EntryId,
    pub title: String,
    pub short_description: String,
    pub icon: Asset,
    pub parent: Option<Arc<Category>>,
}

/// Wire form of a category's fields.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryFields {
    pub title: String,
    pub short_description: String,
    pub icon: Option<Link>,
    pub parent: Option<Link>,
}

impl Category {
    /// Titles from this category up to its root.
    pub fn path(&self) -> Vec<&str> {
        let mut titles = vec![self.title.as_str()];
        let mut next = self.parent.as_deref();
        while let Some(category) = next {
            titles.push(category.title.as_str());
            next = category.parent.as_deref();
        }
        titles
    }
}

impl Model for Category {
    const CONTENT_TYPE: &'static str = "category";
    type Fields = CategoryFields;

    fn materialize(id: &EntryId, fields: &CategoryFields, assets: &[RawAsset]) -> Self {
        Self {
            id: id.clone(),
            title: fields.title.clone(),
            short_description: fields.short_description.clone(),
            icon: weft_core::asset::resolve_asset(fields.icon.as_ref(), assets),
            parent: None,
        }
    }

    fn link(id: &EntryId, fields: &CategoryFields, resolver: &mut Resolver<'_>) {
        let parent = resolver.resolve_ref::<Category>(fields.parent.as_ref());
        resolver.update::<Category>(id, |category| category.parent = parent);
    }
}
