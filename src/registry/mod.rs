//! Registry adapters: one client per package ecosystem.
//!
//! Each adapter fetches a package's full version history from its public
//! registry and normalizes it into [`VersionEntry`] records sorted by release
//! date. [`StaticVersions`] is the offline variant over bundled data.

mod npm;
mod pypi;
mod rubygems;
mod static_data;

pub use npm::NpmRegistry;
pub use pypi::PypiRegistry;
pub use rubygems::RubyGemsRegistry;
pub use static_data::{package_versions, StaticVersions};

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::VersionEntry;

/// Registry fetch errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed registry response: {0}")]
    Malformed(String),
}

/// A source of package version histories.
///
/// One implementation per live registry plus [`StaticVersions`]; the stack
/// assembler picks one per language. Histories come back sorted by
/// `(release_date, version)` ascending.
#[async_trait]
pub trait VersionSource: Send + Sync {
    async fn fetch_versions(&self, package_name: &str) -> Result<Vec<VersionEntry>, RegistryError>;
}

/// Parse the `YYYY-MM-DD` component of a registry timestamp.
///
/// Registries report full ISO timestamps; the picker only needs the calendar
/// day. Returns `None` for strings too short or malformed to carry a date.
pub(crate) fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let date = raw.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Sort entries by `(release_date, version)` ascending.
pub(crate) fn sort_entries(entries: &mut [VersionEntry]) {
    entries.sort_by(|a, b| {
        (a.release_date, a.version.as_str()).cmp(&(b.release_date, b.version.as_str()))
    });
}
