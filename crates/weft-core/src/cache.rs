//! Per-run resolution cache.
//!
//! One map per model type from entry ID to the shared handle of the record.
//! A record is inserted before its entry links are resolved, so a reference
//! cycle that leads back to it finds the cached handle instead of recursing.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::traits::Model;
use crate::types::EntryId;

type Entries = dyn Any + Send + Sync;

struct Slot {
    content_type: &'static str,
    entries: Box<Entries>,
    len: fn(&Entries) -> usize,
}

fn map_len<T: Model>(entries: &Entries) -> usize {
    entries
        .downcast_ref::<HashMap<EntryId, Arc<T>>>()
        .map_or(0, HashMap::len)
}

/// Resolved records for one page fetch.
///
/// Never shared across fetches; an iterator replaces its cache each time it
/// fetches a page.
#[derive(Default)]
pub struct ResolutionCache {
    slots: HashMap<TypeId, Slot>,
}

impl ResolutionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached handle for `id`, if any.
    pub fn get<T: Model>(&self, id: &str) -> Option<Arc<T>> {
        self.map::<T>()?.get(id).cloned()
    }

    /// Returns true if `id` is cached for model `T`.
    pub fn contains<T: Model>(&self, id: &str) -> bool {
        self.map::<T>().is_some_and(|m| m.contains_key(id))
    }

    /// Cache a record, replacing any previous handle for `id`.
    pub fn insert<T: Model>(&mut self, id: EntryId, record: Arc<T>) {
        let slot = self.slots.entry(TypeId::of::<T>()).or_insert_with(|| Slot {
            content_type: T::CONTENT_TYPE,
            entries: Box::new(HashMap::<EntryId, Arc<T>>::new()),
            len: map_len::<T>,
        });
        if let Some(map) = slot.entries.downcast_mut::<HashMap<EntryId, Arc<T>>>() {
            map.insert(id, record);
        }
    }

    /// Mutable access to a cached handle, for writing links in place.
    pub(crate) fn get_mut<T: Model>(&mut self, id: &str) -> Option<&mut Arc<T>> {
        self.slots
            .get_mut(&TypeId::of::<T>())?
            .entries
            .downcast_mut::<HashMap<EntryId, Arc<T>>>()?
            .get_mut(id)
    }

    /// Number of cached records of the given content type.
    pub fn count(&self, content_type: &str) -> usize {
        self.slots
            .values()
            .filter(|slot| slot.content_type == content_type)
            .map(|slot| (slot.len)(slot.entries.as_ref()))
            .sum()
    }

    /// Total number of cached records.
    pub fn len(&self) -> usize {
        self.slots
            .values()
            .map(|slot| (slot.len)(slot.entries.as_ref()))
            .sum()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn map<T: Model>(&self) -> Option<&HashMap<EntryId, Arc<T>>> {
        self.slots
            .get(&TypeId::of::<T>())?
            .entries
            .downcast_ref::<HashMap<EntryId, Arc<T>>>()
    }
}

impl fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .slots
            .values()
            .map(|slot| (slot.content_type, (slot.len)(slot.entries.as_ref())))
            .collect();
        counts.sort_unstable();
        f.debug_struct("ResolutionCache")
            .field("records", &counts)
            .finish()
    }
}
