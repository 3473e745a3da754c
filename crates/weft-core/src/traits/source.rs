//! Page source trait.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;
use crate::store::Page;

/// Query parameters for one page of an entries collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub content_type: String,
    pub skip: u32,
    pub limit: u32,
    pub include: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Something that can deliver pages of raw entries.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page. Non-success responses and malformed envelopes are errors.
    async fn fetch_page(&self, query: &PageQuery) -> Result<Page>;
}

#[async_trait]
impl<S: PageSource + ?Sized> PageSource for Arc<S> {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Page> {
        (**self).fetch_page(query).await
    }
}
