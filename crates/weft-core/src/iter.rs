//! Pull-based pagination over typed entries.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::cache::ResolutionCache;
use crate::resolve::Resolver;
use crate::store::{EntryStore, Page};
use crate::traits::{Model, PageQuery, PageSource};

/// Page size used when a caller asks for zero items per page.
pub const DEFAULT_LIMIT: u32 = 100;

/// Link depth requested when none is given.
pub const DEFAULT_INCLUDE: u32 = 1;

/// Where a listing starts and how much each request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Zero-based page to start at.
    pub page: u32,
    /// Items per page; `0` means [`DEFAULT_LIMIT`].
    pub limit: u32,
    /// Link depth the API should include with each page.
    pub include: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_LIMIT,
            include: DEFAULT_INCLUDE,
        }
    }
}

impl ListOptions {
    /// The configured limit, with `0` replaced by [`DEFAULT_LIMIT`].
    pub fn effective_limit(&self) -> u32 {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

/// Iterates the entries of one content type, a page at a time.
///
/// Each fetch resolves the page with a fresh [`ResolutionCache`] and replaces
/// the buffer. Items are handed out from the end of the buffer, so **a page
/// is delivered in reverse API order**.
///
/// Once a fetch comes back empty the iterator is exhausted and never
/// requests again.
pub struct EntryIterator<T: Model, S> {
    source: S,
    content_type: String,
    locale: Option<String>,
    page: u32,
    limit: u32,
    offset: u32,
    include: u32,
    items: Vec<Arc<T>>,
    cache: ResolutionCache,
    exhausted: bool,
}

impl<T: Model, S: PageSource> EntryIterator<T, S> {
    /// Create an iterator over `T`'s content type.
    pub fn new(source: S, options: ListOptions) -> Self {
        let limit = options.effective_limit();
        Self {
            source,
            content_type: T::CONTENT_TYPE.to_string(),
            locale: None,
            page: options.page,
            limit,
            offset: options.page.saturating_mul(limit),
            include: options.include,
            items: Vec::new(),
            cache: ResolutionCache::new(),
            exhausted: false,
        }
    }

    /// Request entries in the given locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Current zero-based page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Items per page.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Offset of the next request.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Items left in the current buffer.
    pub fn buffered(&self) -> usize {
        self.items.len()
    }

    /// Returns true once a fetch has come back empty.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The cache of the most recent fetch.
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// The query the next fetch will send.
    pub fn query(&self) -> PageQuery {
        PageQuery {
            content_type: self.content_type.clone(),
            skip: self.offset,
            limit: self.limit,
            include: self.include,
            locale: self.locale.clone(),
        }
    }

    /// Fetch and resolve the current page, replacing the buffer.
    ///
    /// On error the buffer is left as it was.
    #[instrument(skip(self), fields(content_type = %self.content_type, skip = self.offset, limit = self.limit))]
    pub async fn fetch(&mut self) -> Result<()> {
        let query = self.query();
        let page = self.source.fetch_page(&query).await?;

        let mut cache = ResolutionCache::new();
        let items = resolve_page::<T>(&page, &mut cache);
        debug!(
            items = items.len(),
            includes = page.includes.entries.len(),
            total = page.total,
            "fetched page"
        );

        self.items = items;
        self.cache = cache;
        Ok(())
    }

    /// Returns the next entry, fetching a page when the buffer is empty.
    ///
    /// `Ok(None)` means the listing is exhausted; every later call returns it
    /// again without a request. A fetch error is returned as is, and the
    /// next call tries the same page again.
    pub async fn next(&mut self) -> Result<Option<Arc<T>>> {
        if self.exhausted {
            return Ok(None);
        }

        if self.items.is_empty() {
            self.fetch().await?;
            if self.items.is_empty() {
                debug!(content_type = %self.content_type, page = self.page, "listing exhausted");
                self.exhausted = true;
                return Ok(None);
            }
        }

        let item = self.items.pop();
        if self.items.is_empty() {
            self.page += 1;
            self.offset = self.page.saturating_mul(self.limit);
            trace!(page = self.page, offset = self.offset, "advanced to next page");
        }
        Ok(item)
    }

    /// Turn the iterator into a stream that ends after exhaustion or the
    /// first error.
    pub fn into_stream(mut self) -> EntryStream<T>
    where
        S: 'static,
    {
        EntryStream::new(async_stream::try_stream! {
            while let Some(item) = self.next().await? {
                yield item;
            }
        })
    }
}

/// A stream of resolved entries.
pub struct EntryStream<T> {
    inner: Pin<Box<dyn Stream<Item = Result<Arc<T>>> + Send>>,
}

impl<T> EntryStream<T> {
    pub(crate) fn new<St>(stream: St) -> Self
    where
        St: Stream<Item = Result<Arc<T>>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl<T> Stream for EntryStream<T> {
    type Item = Result<Arc<T>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Resolve every item of a page as `T`, in API order.
///
/// Items that cannot be resolved come back as zero values.
pub fn resolve_page<T: Model>(page: &Page, cache: &mut ResolutionCache) -> Vec<Arc<T>> {
    let store = EntryStore::from_page(page);
    let mut resolver = Resolver::new(&store, cache);
    page.items
        .iter()
        .map(|item| resolver.resolve_one::<T>(item.id()))
        .collect()
}

/// Fetch one page and resolve it, in API order.
pub async fn fetch_all<T, S>(source: &S, query: &PageQuery) -> Result<Vec<Arc<T>>>
where
    T: Model,
    S: PageSource + ?Sized,
{
    let page = source.fetch_page(query).await?;
    let mut cache = ResolutionCache::new();
    Ok(resolve_page::<T>(&page, &mut cache))
}
