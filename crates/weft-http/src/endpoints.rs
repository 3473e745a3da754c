//! Content API endpoint paths and response envelopes.

use serde::{Deserialize, Serialize};

/// Content type definitions of a space environment.
pub const CONTENT_TYPES: &str = "content_types";

/// Locales of a space environment.
pub const LOCALES: &str = "locales";

/// Entries collection.
pub const ENTRIES: &str = "entries";

/// Upper bound on items per request that the delivery API accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A collection envelope: `{"sys": {"type": "Array"}, "total", "skip", "limit", "items"}`.
///
/// Entries pages carry `includes` as well and decode as [`weft_core::Page`].
#[derive(Debug, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Paging parameters for non-entry collections.
#[derive(Debug, Serialize)]
pub struct CollectionQuery {
    pub limit: u32,
}

/// A locale defined for a space environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Locale code, e.g. `en-US`.
    pub code: String,
    pub name: String,
    /// Whether this is the environment's default locale.
    #[serde(default)]
    pub default: bool,
    /// Locale used for fields without a value in this one.
    #[serde(default)]
    pub fallback_code: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

/// Error body returned with non-success responses.
///
/// ```json
/// {"sys": {"type": "Error", "id": "NotFound"}, "message": "...", "requestId": "..."}
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub sys: Option<ErrorSys>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorSys {
    pub id: String,
}
