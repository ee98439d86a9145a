//! npm registry adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{parse_release_date, sort_entries, RegistryError, VersionSource};
use crate::models::VersionEntry;

const DEFAULT_URL: &str = "https://registry.npmjs.org";

/// `GET {base}/{name}` — the response's `time` object maps version to
/// publish timestamp, with bookkeeping keys `created` and `modified` mixed in.
#[derive(Debug, Deserialize)]
struct NpmRegistryResponse {
    time: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone)]
pub struct NpmRegistry {
    base_url: String,
    client: Client,
}

impl NpmRegistry {
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

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionSource for NpmRegistry {
    async fn fetch_versions(&self, package_name: &str) -> Result<Vec<VersionEntry>, RegistryError> {
        let url = format!("{}/{}", self.base_url, package_name);
        tracing::debug!(package = package_name, "fetching npm version history");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(format!(
                "Package \"{}\" not found in npm registry",
                package_name
            )));
        }
        let response = response.error_for_status()?;
        let body: NpmRegistryResponse = response.json().await?;

        let time = body.time.ok_or_else(|| {
            RegistryError::Malformed(format!(
                "Package \"{}\" has no version history",
                package_name
            ))
        })?;

        Ok(entries_from_time_map(package_name, time))
    }
}

fn entries_from_time_map(package_name: &str, time: HashMap<String, String>) -> Vec<VersionEntry> {
    let mut entries = Vec::with_capacity(time.len());
    for (version, timestamp) in time {
        if version == "created" || version == "modified" {
            continue;
        }
        match parse_release_date(&timestamp) {
            Some(date) => entries.push(VersionEntry::new(version, date)),
            None => {
                tracing::warn!(
                    package = package_name,
                    version = %version,
                    timestamp = %timestamp,
                    "skipping npm entry with unparseable timestamp"
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

    fn time_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn skips_created_and_modified_keys() {
        let entries = entries_from_time_map(
            "express",
            time_map(&[
                ("created", "2010-12-29T19:38:25.450Z"),
                ("modified", "2024-03-25T15:21:27.427Z"),
                ("4.17.1", "2019-05-26T05:46:03.954Z"),
            ]),
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].version, "4.17.1");
        assert_eq!(
            entries[0].release_date,
            NaiveDate::from_ymd_opt(2019, 5, 26).unwrap()
        );
    }

    #[test]
    fn sorts_by_release_date_ascending() {
        let entries = entries_from_time_map(
            "express",
            time_map(&[
                ("4.18.2", "2022-10-08T21:48:48.000Z"),
                ("4.16.0", "2017-09-28T04:50:29.000Z"),
                ("4.17.1", "2019-05-26T05:46:03.000Z"),
            ]),
        );

        let versions: Vec<_> = entries.iter().map(|e| e.version.as_str()).collect();
        assert_eq!(versions, vec!["4.16.0", "4.17.1", "4.18.2"]);
    }

    #[test]
    fn skips_entries_with_unparseable_timestamps() {
        let entries = entries_from_time_map(
            "express",
            time_map(&[
                ("1.0.0", "not a date"),
                ("2.0.0", "2014-04-09T21:13:24.000Z"),
            ]),
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].version, "2.0.0");
    }
}
