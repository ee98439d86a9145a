use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One published release of a package.
///
/// Registry adapters normalize their ecosystem's response shape into this.
/// Entries are immutable once fetched; registry timestamps are truncated to
/// the calendar day, which is all the year-based picker needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionEntry {
    pub version: String,
    pub release_date: NaiveDate,
}

impl VersionEntry {
    pub fn new(version: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            version: version.into(),
            release_date,
        }
    }
}
