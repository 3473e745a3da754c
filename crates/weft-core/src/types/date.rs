//! Calendar date field type.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ISO 8601 calendar date as stored in `Date` fields.
///
/// Date fields may carry a full timestamp (`2017-05-04T00:00+02:00`); only
/// the date part is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    const LAYOUT: &'static str = "%Y-%m-%d";

    /// Parse a date or timestamp string.
    pub fn parse(s: &str) -> Option<Self> {
        let day = s.get(..10)?;
        NaiveDate::parse_from_str(day, Self::LAYOUT).ok().map(Self)
    }

    /// Returns the underlying date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::LAYOUT))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", s)))
    }
}
