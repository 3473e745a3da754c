//! Entry resolution.
//!
//! [`Resolver`] turns raw entries into typed records for one resolution run:
//! one page plus its includes, and one [`ResolutionCache`].
//!
//! Resolving an entry of model `T`:
//!
//! 1. a cached handle for the ID is returned as is;
//! 2. otherwise the entry is looked up among the visible entries, and a miss
//!    yields the zero value;
//! 3. the field payload is decoded, and a decode failure also yields the zero
//!    value (nothing is cached);
//! 4. the record is built from scalar and asset fields and cached;
//! 5. entry links are resolved in the model's field order and written into
//!    the cached record;
//! 6. the cached handle is returned.
//!
//! A cycle that leads back to a record during step 5 receives the handle as
//! it is at that moment. Later link writes copy the record on write, so the
//! handle held by the cycle keeps the links resolved after the point of
//! re-entry at their zero value. The cache ends up with the fully linked
//! record, and later lookups return that same handle.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::asset::{self, Asset};
use crate::cache::ResolutionCache;
use crate::store::{EntryStore, RawEntry};
use crate::traits::{Model, Polymorphic};
use crate::types::{EntryId, Link};

/// Resolves links against one entry store, sharing one cache.
pub struct Resolver<'a> {
    store: &'a EntryStore<'a>,
    cache: &'a mut ResolutionCache,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `store` that records into `cache`.
    pub fn new(store: &'a EntryStore<'a>, cache: &'a mut ResolutionCache) -> Self {
        Self { store, cache }
    }

    /// The entries and assets visible to this run.
    pub fn store(&self) -> &'a EntryStore<'a> {
        self.store
    }

    /// Resolve one entry ID as model `T`; the zero value if it cannot be resolved.
    pub fn resolve_one<T: Model>(&mut self, id: &EntryId) -> Arc<T> {
        self.lookup::<T>(id.as_str()).unwrap_or_default()
    }

    /// Resolve every visible entry named by `links` as model `T`.
    ///
    /// Results follow the order of the visible entries, not of `links`.
    /// A link repeated in `links` yields a repeated result. Unresolvable
    /// entries are skipped.
    pub fn resolve_many<T: Model>(&mut self, links: &[Link]) -> Vec<Arc<T>> {
        let store = self.store;
        store
            .entries_in(links)
            .filter_map(|entry| self.resolve_entry::<T>(entry))
            .collect()
    }

    /// Resolve a self-recursive link; `None` when absent or unresolvable.
    pub fn resolve_ref<T: Model>(&mut self, link: Option<&Link>) -> Option<Arc<T>> {
        self.lookup::<T>(link?.id().as_str())
    }

    /// Resolve a link to an owned record; the zero value when unresolvable.
    pub fn resolve_value<T: Model>(&mut self, link: Option<&Link>) -> T {
        link.and_then(|link| self.lookup::<T>(link.id().as_str()))
            .map(Arc::unwrap_or_clone)
            .unwrap_or_default()
    }

    /// Resolve links to owned records, in visible order.
    pub fn resolve_values<T: Model>(&mut self, links: &[Link]) -> Vec<T> {
        self.resolve_many::<T>(links)
            .into_iter()
            .map(Arc::unwrap_or_clone)
            .collect()
    }

    /// Resolve a polymorphic link by the target entry's content type.
    ///
    /// Returns `None` if the link is absent, the entry is not visible, or its
    /// content type is not part of `U`.
    pub fn resolve_polymorphic<U: Polymorphic>(&mut self, link: Option<&Link>) -> Option<U> {
        let entry = self.store.entry(link?.id().as_str())?;
        let resolved = U::dispatch(entry, self);
        if resolved.is_none() {
            trace!(entry = %entry.id(), content_type = %entry.content_type(), "no model for content type");
        }
        resolved
    }

    /// Resolve polymorphic links in visible order, skipping unmatched entries.
    pub fn resolve_polymorphic_many<U: Polymorphic>(&mut self, links: &[Link]) -> Vec<U> {
        let store = self.store;
        store
            .entries_in(links)
            .filter_map(|entry| U::dispatch(entry, self))
            .collect()
    }

    /// Resolve an asset link; the zero asset when unresolvable.
    pub fn resolve_asset(&self, link: Option<&Link>) -> Asset {
        asset::resolve_asset(link, self.store.assets())
    }

    /// Resolve asset links, dropping misses.
    pub fn resolve_assets(&self, links: &[Link]) -> Vec<Asset> {
        asset::resolve_assets(links, self.store.assets())
    }

    /// Resolve a specific raw entry as model `T`.
    ///
    /// Returns `None` if the entry's content type is not `T`'s or its fields
    /// do not decode.
    pub fn resolve_entry<T: Model>(&mut self, entry: &RawEntry) -> Option<Arc<T>> {
        let id = entry.id();
        if let Some(hit) = self.cache.get::<T>(id.as_str()) {
            trace!(content_type = T::CONTENT_TYPE, entry = %id, "cache hit");
            return Some(hit);
        }

        if entry.content_type() != T::CONTENT_TYPE {
            trace!(
                entry = %id,
                expected = T::CONTENT_TYPE,
                actual = %entry.content_type(),
                "content type mismatch"
            );
            return None;
        }

        let fields = match decode_fields::<T>(&entry.fields) {
            Ok(fields) => fields,
            Err(err) => {
                warn!(content_type = T::CONTENT_TYPE, entry = %id, error = %err, "failed to decode entry fields");
                return None;
            }
        };

        let record = T::materialize(id, &fields, self.store.assets());
        self.cache.insert(id.clone(), Arc::new(record));
        T::link(id, &fields, self);

        self.cache.get::<T>(id.as_str())
    }

    /// Apply one link write to the cached record for `id`.
    ///
    /// Handles already given out (to a cycle, or to a caller) keep the
    /// record as it was before the write.
    pub fn update<T: Model>(&mut self, id: &EntryId, write: impl FnOnce(&mut T)) {
        if let Some(handle) = self.cache.get_mut::<T>(id.as_str()) {
            write(Arc::make_mut(handle));
        }
    }

    fn lookup<T: Model>(&mut self, id: &str) -> Option<Arc<T>> {
        if let Some(hit) = self.cache.get::<T>(id) {
            trace!(content_type = T::CONTENT_TYPE, entry = id, "cache hit");
            return Some(hit);
        }
        let entry = self.store.entry(id)?;
        self.resolve_entry::<T>(entry)
    }
}

fn decode_fields<T: Model>(fields: &Value) -> Result<T::Fields, serde_json::Error> {
    if fields.is_null() {
        T::Fields::deserialize(&Value::Object(Map::new()))
    } else {
        T::Fields::deserialize(fields)
    }
}
