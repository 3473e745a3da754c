//! Typed content models.

use serde::de::DeserializeOwned;

use crate::resolve::Resolver;
use crate::store::{RawAsset, RawEntry};
use crate::types::EntryId;

/// A typed record for one content type.
///
/// Resolution happens in two phases. [`Model::materialize`] builds the
/// record from scalar and asset fields; the record is then cached, and
/// [`Model::link`] fills in entry links through the resolver. Links are
/// written in a fixed order per type, which decides what a cycle observes
/// when it closes back on a record that is still being linked.
///
/// Self-recursive links must be laid out as `Option<Arc<Self>>` or
/// `Vec<Arc<Self>>` so the record has a finite size.
pub trait Model: Clone + Default + Send + Sync + 'static {
    /// Content type ID this model decodes.
    const CONTENT_TYPE: &'static str;

    /// The wire form of the entry's `fields` object.
    type Fields: DeserializeOwned;

    /// Build the record from scalar and asset fields only.
    fn materialize(id: &EntryId, fields: &Self::Fields, assets: &[RawAsset]) -> Self;

    /// Resolve entry links into the cached record, one field at a time.
    fn link(id: &EntryId, fields: &Self::Fields, resolver: &mut Resolver<'_>);
}

/// A closed union over a schema's models, used for polymorphic links.
pub trait Polymorphic: Sized {
    /// Resolve `entry` as whichever model its content type tag names.
    ///
    /// Returns `None` when the tag matches no known model.
    fn dispatch(entry: &RawEntry, resolver: &mut Resolver<'_>) -> Option<Self>;
}
