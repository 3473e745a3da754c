//! Content type identifier.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{MAX_ID_LEN, is_id_char};
use crate::error::{Error, InvalidInputError};

/// A content type ID, e.g. `2wKn6yEnZewu2SCCkus4as` or `blogPost`.
///
/// Every raw entry carries one; polymorphic links dispatch on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct ContentTypeId(String);

impl ContentTypeId {
    /// Create a new content type ID, validating the format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ContentTypeId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > MAX_ID_LEN {
            return Err(InvalidInputError::ContentTypeId {
                value: s.to_string(),
                reason: format!("exceeds maximum length of {} characters", MAX_ID_LEN),
            }
            .into());
        }

        if let Some(c) = s.chars().find(|c| !is_id_char(*c)) {
            return Err(InvalidInputError::ContentTypeId {
                value: s.to_string(),
                reason: format!("contains invalid character '{}'", c),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentTypeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContentTypeId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ContentTypeId {
    /// Wire IDs are taken verbatim; only caller input goes through [`ContentTypeId::new`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

impl From<ContentTypeId> for String {
    fn from(id: ContentTypeId) -> Self {
        id.0
    }
}

impl AsRef<str> for ContentTypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ContentTypeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ContentTypeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
