//! Core content delivery types.
//!
//! Identifiers built by callers are validated at construction time.
//! Identifiers decoded from responses are kept as sent.

mod api_url;
mod content_type_id;
mod date;
mod entry_id;
mod link;

pub use api_url::ApiUrl;
pub use content_type_id::ContentTypeId;
pub use date::Date;
pub use entry_id::EntryId;
pub use link::{Link, LinkSys, LinkType};

/// Characters allowed in Contentful resource IDs.
pub(crate) fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

/// Maximum length of a Contentful resource ID.
pub(crate) const MAX_ID_LEN: usize = 64;
