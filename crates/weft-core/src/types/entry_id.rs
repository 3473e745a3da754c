//! Entry and asset identifier type.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use super::{MAX_ID_LEN, is_id_char};
use crate::error::{Error, InvalidInputError};

/// An entry or asset ID.
///
/// IDs are opaque. Decoding accepts whatever the server sends; [`EntryId::new`]
/// checks caller input against 1 to 64 characters drawn from `[A-Za-z0-9._-]`.
///
/// # Example
///
/// ```
/// use weft_core::EntryId;
///
/// let id = EntryId::new("5KsDBWseXY6QegucYAoacS").unwrap();
/// assert_eq!(id.as_str(), "5KsDBWseXY6QegucYAoacS");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct EntryId(String);

impl EntryId {
    /// Create a new ID from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, too long, or contains
    /// characters outside the allowed set.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the zero-value ID carried by unresolved objects.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            "cannot be empty".to_string()
        } else if s.len() > MAX_ID_LEN {
            format!("exceeds maximum length of {} characters", MAX_ID_LEN)
        } else if let Some(c) = s.chars().find(|c| !is_id_char(*c)) {
            format!("contains invalid character '{}'", c)
        } else {
            return Ok(());
        };

        Err(InvalidInputError::EntryId {
            value: s.to_string(),
            reason,
        }
        .into())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EntryId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    /// Wire IDs are taken verbatim; only caller input goes through [`EntryId::new`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
