//! weft-core - typed content graph resolution
//!
//! Turns pages of raw Contentful-style entries into typed, linked records.
//! Links between entries may form cycles; every resolution run shares one
//! [`ResolutionCache`], and a record is cached before its links are
//! followed, so cycles terminate.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use serde::Deserialize;
//! use weft_core::{EntryId, Link, Model, RawAsset, Resolver};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Category {
//!     title: String,
//!     parent: Option<Arc<Category>>,
//! }
//!
//! #[derive(Deserialize)]
//! struct CategoryFields {
//!     #[serde(default)]
//!     title: String,
//!     parent: Option<Link>,
//! }
//!
//! impl Model for Category {
//!     const CONTENT_TYPE: &'static str = "category";
//!     type Fields = CategoryFields;
//!
//!     fn materialize(_: &EntryId, fields: &CategoryFields, _: &[RawAsset]) -> Self {
//!         Self { title: fields.title.clone(), parent: None }
//!     }
//!
//!     fn link(id: &EntryId, fields: &CategoryFields, resolver: &mut Resolver<'_>) {
//!         let parent = resolver.resolve_ref::<Category>(fields.parent.as_ref());
//!         resolver.update::<Category>(id, |c| c.parent = parent);
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page: weft_core::Page = serde_json::from_value(serde_json::json!({
//!     "items": [
//!         { "sys": { "id": "child", "contentType": { "sys": { "id": "category" } } },
//!           "fields": { "title": "child",
//!                       "parent": { "sys": { "type": "Link", "linkType": "Entry", "id": "root" } } } },
//!         { "sys": { "id": "root", "contentType": { "sys": { "id": "category" } } },
//!           "fields": { "title": "root" } }
//!     ]
//! }))?;
//!
//! let mut cache = weft_core::ResolutionCache::new();
//! let categories = weft_core::resolve_page::<Category>(&page, &mut cache);
//! let parent = categories[0].parent.as_ref().unwrap();
//! assert_eq!(parent.title, "root");
//! assert!(parent.parent.is_none());
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod cache;
pub mod error;
pub mod iter;
pub mod resolve;
pub mod schema;
pub mod store;
pub mod traits;
pub mod types;

// Re-export primary types at crate root for convenience
pub use asset::Asset;
pub use cache::ResolutionCache;
pub use error::Error;
pub use iter::{EntryIterator, EntryStream, ListOptions, fetch_all, resolve_page};
pub use resolve::Resolver;
pub use schema::{FieldShape, Schema};
pub use store::{EntryStore, Includes, Page, RawAsset, RawEntry};
pub use traits::{Model, PageQuery, PageSource, Polymorphic};
pub use types::{ApiUrl, ContentTypeId, Date, EntryId, Link, LinkType};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
