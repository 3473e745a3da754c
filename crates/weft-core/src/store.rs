//! Raw page payloads and the entry store built over them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{ContentTypeId, EntryId, Link};

/// The `sys` block of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySys {
    pub id: EntryId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub content_type: ContentTypeLink,
    #[serde(default)]
    pub revision: Option<u64>,
}

/// Link to the content type of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeLink {
    pub sys: ContentTypeLinkSys,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeLinkSys {
    pub id: ContentTypeId,
}

/// An entry as delivered: metadata plus an undecoded field payload.
///
/// Fields are decoded lazily by the model that resolves the entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    pub sys: EntrySys,
    #[serde(default)]
    pub fields: Value,
}

impl RawEntry {
    /// Create a raw entry from its parts.
    pub fn new(id: EntryId, content_type: ContentTypeId, fields: Value) -> Self {
        Self {
            sys: EntrySys {
                id,
                kind: Some("Entry".to_string()),
                content_type: ContentTypeLink {
                    sys: ContentTypeLinkSys { id: content_type },
                },
                revision: None,
            },
            fields,
        }
    }

    /// Returns the entry ID.
    pub fn id(&self) -> &EntryId {
        &self.sys.id
    }

    /// Returns the content type tag used for polymorphic dispatch.
    pub fn content_type(&self) -> &ContentTypeId {
        &self.sys.content_type.sys.id
    }
}

/// The `sys` block of an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSys {
    pub id: EntryId,
}

/// An asset as delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAsset {
    pub sys: AssetSys,
    #[serde(default)]
    pub fields: AssetFields,
}

impl RawAsset {
    /// Returns the asset ID.
    pub fn id(&self) -> &EntryId {
        &self.sys.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file: Option<AssetFile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub details: FileDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileDetails {
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub image: Option<ImageDetails>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImageDetails {
    pub width: u32,
    pub height: u32,
}

/// Entries and assets delivered alongside a page because page items link to them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Includes {
    #[serde(rename = "Entry", default)]
    pub entries: Vec<RawEntry>,
    #[serde(rename = "Asset", default)]
    pub assets: Vec<RawAsset>,
}

/// One page of an entries collection response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub items: Vec<RawEntry>,
    #[serde(default)]
    pub includes: Includes,
}

/// The entries and assets visible to one resolution run.
///
/// Visible entries are the includes followed by the page items, so links
/// between sibling items resolve without another request. Lookups are
/// linear scans in that order.
#[derive(Debug, Clone)]
pub struct EntryStore<'a> {
    entries: Vec<&'a RawEntry>,
    assets: &'a [RawAsset],
}

impl<'a> EntryStore<'a> {
    /// Build the store for one fetched page.
    pub fn from_page(page: &'a Page) -> Self {
        Self::new(&page.items, &page.includes)
    }

    /// Build a store over page items and includes.
    pub fn new(items: &'a [RawEntry], includes: &'a Includes) -> Self {
        Self {
            entries: includes.entries.iter().chain(items).collect(),
            assets: &includes.assets,
        }
    }

    /// Returns the first visible entry with the given ID.
    pub fn entry(&self, id: &str) -> Option<&'a RawEntry> {
        self.entries.iter().copied().find(|e| e.id().as_str() == id)
    }

    /// Visible entries whose ID appears in `links`, in visible order.
    ///
    /// IDs that are not visible are dropped. Each visible entry is yielded
    /// once per link naming it, so duplicate links are kept.
    pub fn entries_in<'s>(&'s self, links: &'s [Link]) -> impl Iterator<Item = &'a RawEntry> + 's {
        self.entries.iter().copied().flat_map(move |e| {
            let hits = links.iter().filter(|l| l.id() == e.id()).count();
            std::iter::repeat_n(e, hits)
        })
    }

    /// All visible entries, includes first.
    pub fn entries(&self) -> &[&'a RawEntry] {
        &self.entries
    }

    /// Visible assets.
    pub fn assets(&self) -> &'a [RawAsset] {
        self.assets
    }
}
