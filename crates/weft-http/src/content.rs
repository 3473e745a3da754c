//! Typed access to a space environment's content.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use weft_core::iter::{self, EntryIterator, ListOptions};
use weft_core::schema::ContentTypeSchema;
use weft_core::{Model, Page, PageQuery, PageSource, Result, Schema};

use crate::client::CdnClient;
use crate::config::ClientConfig;
use crate::endpoints::{self, Collection, CollectionQuery, Locale};

/// Content delivery client for one space environment.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ContentClient {
    cdn: CdnClient,
    locale: Option<String>,
}

impl ContentClient {
    /// Create a client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let cdn = CdnClient::new(&config)?;
        Ok(Self {
            cdn,
            locale: config.locale,
        })
    }

    /// Create a client from the `CONTENTFUL_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The underlying HTTP client.
    pub fn cdn(&self) -> &CdnClient {
        &self.cdn
    }

    /// Locale used for requests that do not name one.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Fetch the content type definitions of the environment.
    #[instrument(skip(self))]
    pub async fn fetch_schema(&self) -> Result<Schema> {
        let query = CollectionQuery {
            limit: endpoints::MAX_PAGE_SIZE,
        };
        let types: Collection<ContentTypeSchema> =
            self.cdn.get(endpoints::CONTENT_TYPES, &query).await?;
        debug!(content_types = types.items.len(), "fetched schema");
        Ok(Schema::new(types.items))
    }

    /// Fetch the locales of the environment.
    #[instrument(skip(self))]
    pub async fn fetch_locales(&self) -> Result<Vec<Locale>> {
        let query = CollectionQuery {
            limit: endpoints::MAX_PAGE_SIZE,
        };
        let locales: Collection<Locale> = self.cdn.get(endpoints::LOCALES, &query).await?;
        Ok(locales.items)
    }

    /// The environment's default locale, if one is marked.
    pub async fn default_locale(&self) -> Result<Option<Locale>> {
        let locales = self.fetch_locales().await?;
        Ok(locales.into_iter().find(|l| l.default))
    }

    /// Iterate over entries of `T`'s content type.
    ///
    /// See [`EntryIterator`] for the delivery order.
    pub fn list<T: Model>(&self, options: ListOptions) -> EntryIterator<T, ContentClient> {
        let iter = EntryIterator::new(self.clone(), options);
        match &self.locale {
            Some(locale) => iter.with_locale(locale.clone()),
            None => iter,
        }
    }

    /// Fetch and resolve the first page of `T`'s entries, in API order.
    pub async fn fetch_all<T: Model>(&self) -> Result<Vec<Arc<T>>> {
        let options = ListOptions::default();
        let query = PageQuery {
            content_type: T::CONTENT_TYPE.to_string(),
            skip: 0,
            limit: options.effective_limit(),
            include: options.include,
            locale: self.locale.clone(),
        };
        iter::fetch_all::<T, _>(self, &query).await
    }

    /// Fetch one unresolved entries page.
    ///
    /// The query's locale wins over the client's default; without either
    /// the parameter is omitted.
    #[instrument(skip(self), fields(content_type = %query.content_type))]
    pub async fn fetch_raw_page(&self, query: &PageQuery) -> Result<Page> {
        let mut query = query.clone();
        if query.locale.is_none() {
            query.locale = self.locale.clone();
        }
        let page: Page = self.cdn.get(endpoints::ENTRIES, &query).await?;
        debug!(
            items = page.items.len(),
            included_entries = page.includes.entries.len(),
            included_assets = page.includes.assets.len(),
            total = page.total,
            "fetched entries page"
        );
        Ok(page)
    }
}

#[async_trait]
impl PageSource for ContentClient {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Page> {
        self.fetch_raw_page(query).await
    }
}
