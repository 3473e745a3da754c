//! Link objects referencing entries and assets.

use serde::{Deserialize, Serialize};

use super::EntryId;

/// What a [`Link`] points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkType {
    Entry,
    Asset,
    #[serde(other)]
    Other,
}

/// A reference to another entry or asset, as it appears in a field payload.
///
/// ```json
/// { "sys": { "type": "Link", "linkType": "Entry", "id": "nyancat" } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub sys: LinkSys,
}

/// The `sys` block of a [`Link`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSys {
    pub id: EntryId,
    pub link_type: LinkType,
}

impl Link {
    /// A link to an entry.
    pub fn entry(id: EntryId) -> Self {
        Self {
            sys: LinkSys {
                id,
                link_type: LinkType::Entry,
            },
        }
    }

    /// A link to an asset.
    pub fn asset(id: EntryId) -> Self {
        Self {
            sys: LinkSys {
                id,
                link_type: LinkType::Asset,
            },
        }
    }

    /// Returns the linked ID.
    pub fn id(&self) -> &EntryId {
        &self.sys.id
    }

    /// Returns the kind of resource this link points at.
    pub fn link_type(&self) -> LinkType {
        self.sys.link_type
    }
}
