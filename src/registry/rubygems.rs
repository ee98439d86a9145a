//! RubyGems registry adapter.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{parse_release_date, sort_entries, RegistryError, VersionSource};
use crate::models::VersionEntry;

const DEFAULT_URL: &str = "https://rubygems.org";

/// `GET {base}/api/v1/versions/{name}.json` — a flat list of version records.
#[derive(Debug, Deserialize)]
struct GemVersion {
    number: String,
    created_at: String,
}

#[derive(Debug, Clone)]
pub struct RubyGemsRegistry {
    base_url: String,
    client: Client,
}

impl RubyGemsRegistry {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_URL)
    }

    /// Create with an explicit base URL (tests point this at a local server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

impl Default for RubyGemsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionSource for RubyGemsRegistry {
    async fn fetch_versions(&self, package_name: &str) -> Result<Vec<VersionEntry>, RegistryError> {
        let url = format!("{}/api/v1/versions/{}.json", self.base_url, package_name);
        tracing::debug!(package = package_name, "fetching RubyGems version history");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(format!(
                "Package \"{}\" not found in RubyGems",
                package_name
            )));
        }
        let response = response.error_for_status()?;
        let body: Vec<GemVersion> = response.json().await?;

        if body.is_empty() {
            return Err(RegistryError::Malformed(format!(
                "Package \"{}\" has no versions",
                package_name
            )));
        }

        Ok(entries_from_gem_versions(package_name, body))
    }
}

fn entries_from_gem_versions(package_name: &str, versions: Vec<GemVersion>) -> Vec<VersionEntry> {
    let mut entries = Vec::with_capacity(versions.len());
    for gem in versions {
        match parse_release_date(&gem.created_at) {
            Some(date) => entries.push(VersionEntry::new(gem.number, date)),
            None => {
                tracing::warn!(
                    package = package_name,
                    version = %gem.number,
                    timestamp = %gem.created_at,
                    "skipping RubyGems entry with unparseable timestamp"
                );
            }
        }
    }
    sort_entries(&mut entries);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn gem(number: &str, created_at: &str) -> GemVersion {
        GemVersion {
            number: number.to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn normalizes_and_sorts_gem_records() {
        let entries = entries_from_gem_versions(
            "rspec",
            vec![
                gem("3.10.0", "2020-10-30T16:59:03.245Z"),
                gem("3.4.0", "2015-11-11T17:59:51.998Z"),
            ],
        );

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].version, "3.4.0");
        assert_eq!(
            entries[1].release_date,
            NaiveDate::from_ymd_opt(2020, 10, 30).unwrap()
        );
    }

    #[test]
    fn skips_records_with_unparseable_timestamps() {
        let entries = entries_from_gem_versions(
            "rspec",
            vec![gem("3.4.0", "never"), gem("3.9.0", "2019-10-08T03:58:41Z")],
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].version, "3.9.0");
    }
}
