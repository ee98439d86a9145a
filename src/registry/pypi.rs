//! PyPI registry adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{parse_release_date, sort_entries, RegistryError, VersionSource};
use crate::models::VersionEntry;

const DEFAULT_URL: &str = "https://pypi.org";

/// `GET {base}/pypi/{name}/json` — `releases` maps version to the list of
/// uploaded files; the release date is the first file's upload time.
#[derive(Debug, Deserialize)]
struct PypiResponse {
    releases: Option<HashMap<String, Vec<PypiFile>>>,
}

#[derive(Debug, Deserialize)]
struct PypiFile {
    upload_time: String,
}

#[derive(Debug, Clone)]
pub struct PypiRegistry {
    base_url: String,
    client: Client,
}

impl PypiRegistry {
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

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionSource for PypiRegistry {
    async fn fetch_versions(&self, package_name: &str) -> Result<Vec<VersionEntry>, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        tracing::debug!(package = package_name, "fetching PyPI version history");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(format!(
                "Package \"{}\" not found in PyPI",
                package_name
            )));
        }
        let response = response.error_for_status()?;
        let body: PypiResponse = response.json().await?;

        let releases = body.releases.ok_or_else(|| {
            RegistryError::Malformed(format!("Package \"{}\" has no releases", package_name))
        })?;

        Ok(entries_from_releases(package_name, releases))
    }
}

fn entries_from_releases(
    package_name: &str,
    releases: HashMap<String, Vec<PypiFile>>,
) -> Vec<VersionEntry> {
    let mut entries = Vec::with_capacity(releases.len());
    for (version, files) in releases {
        // Versions yanked before any file upload appear with an empty list.
        let Some(first) = files.first() else {
            continue;
        };
        match parse_release_date(&first.upload_time) {
            Some(date) => entries.push(VersionEntry::new(version, date)),
            None => {
                tracing::warn!(
                    package = package_name,
                    version = %version,
                    timestamp = %first.upload_time,
                    "skipping PyPI entry with unparseable upload time"
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

    fn releases(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<PypiFile>> {
        pairs
            .iter()
            .map(|(version, uploads)| {
                (
                    version.to_string(),
                    uploads
                        .iter()
                        .map(|t| PypiFile {
                            upload_time: t.to_string(),
                        })
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn takes_the_first_upload_per_version() {
        let entries = entries_from_releases(
            "pytest",
            releases(&[(
                "6.1.2",
                &["2020-10-28T19:36:39", "2020-10-28T19:36:41"] as &[&str],
            )]),
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].release_date,
            NaiveDate::from_ymd_opt(2020, 10, 28).unwrap()
        );
    }

    #[test]
    fn skips_versions_with_no_uploaded_files() {
        let entries = entries_from_releases(
            "pytest",
            releases(&[
                ("3.0.0", &["2016-08-18T11:20:33"] as &[&str]),
                ("2.9.9", &[] as &[&str]),
            ]),
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].version, "3.0.0");
    }

    #[test]
    fn sorts_by_release_date_ascending() {
        let entries = entries_from_releases(
            "pytest",
            releases(&[
                ("7.1.2", &["2022-04-23T18:01:13"] as &[&str]),
                ("3.0.0", &["2016-08-18T11:20:33"] as &[&str]),
                ("6.1.2", &["2020-10-28T19:36:39"] as &[&str]),
            ]),
        );

        let versions: Vec<_> = entries.iter().map(|e| e.version.as_str()).collect();
        assert_eq!(versions, vec!["3.0.0", "6.1.2", "7.1.2"]);
    }
}
