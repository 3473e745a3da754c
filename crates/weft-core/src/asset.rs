//! Asset resolution.
//!
//! Assets carry no outgoing links, so they are resolved by a plain scan and
//! never cached.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::store::RawAsset;
use crate::types::{EntryId, Link};

/// A resolved media item.
///
/// Unresolvable asset links produce `Asset::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub content_type: String,
    pub width: u32,
    pub height: u32,
    pub size: u64,
}

impl Asset {
    /// Returns true for the zero-value asset of an unresolved link.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl From<&RawAsset> for Asset {
    fn from(raw: &RawAsset) -> Self {
        let file = raw.fields.file.clone().unwrap_or_default();
        let image = file.details.image.unwrap_or_default();

        Self {
            id: raw.id().clone(),
            title: raw.fields.title.clone().unwrap_or_default(),
            description: raw.fields.description.clone().unwrap_or_default(),
            url: absolute_url(&file.url),
            content_type: file.content_type.unwrap_or_default(),
            width: image.width,
            height: image.height,
            size: file.details.size.unwrap_or_default(),
        }
    }
}

/// File URLs are delivered protocol-relative (`//images.ctfassets.net/...`).
fn absolute_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

/// Resolve an asset link against the visible assets.
pub fn resolve_asset(link: Option<&Link>, assets: &[RawAsset]) -> Asset {
    let Some(link) = link else {
        return Asset::default();
    };

    match assets.iter().find(|a| a.id() == link.id()) {
        Some(raw) => Asset::from(raw),
        None => {
            trace!(asset = %link.id(), "asset not visible");
            Asset::default()
        }
    }
}

/// Resolve several asset links, in link order, dropping misses.
pub fn resolve_assets(links: &[Link], assets: &[RawAsset]) -> Vec<Asset> {
    links
        .iter()
        .filter_map(|link| assets.iter().find(|a| a.id() == link.id()))
        .map(Asset::from)
        .collect()
}
