//! Year-based version selection.

use chrono::{Datelike, NaiveDate};

use crate::models::VersionEntry;

/// Confidence assigned when a release is known to have existed by the target
/// year; [`FALLBACK_CONFIDENCE`] marks the best-guess earliest release.
pub const ELIGIBLE_CONFIDENCE: f64 = 0.9;
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// The version a picker run settled on.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedVersion {
    pub version: String,
    pub release_date: NaiveDate,
    pub confidence: f64,
}

/// Pick the best version of a package for a target year.
///
/// Versions released on or before December 31 of the target year are
/// eligible; the latest of them wins with confidence 0.9. If the package's
/// entire history postdates the year, the first-ever release wins with
/// confidence 0.5 — the closest known version, though it likely didn't exist
/// yet. Release-date ties break lexicographically by version, comparing
/// `(release_date, version)` tuples on both branches. Returns `None` only
/// for an empty history.
pub fn pick_version_by_year(versions: &[VersionEntry], target_year: i32) -> Option<PickedVersion> {
    let cutoff = NaiveDate::from_ymd_opt(target_year, 12, 31)?;

    let eligible = versions
        .iter()
        .filter(|v| v.release_date <= cutoff)
        .max_by(|a, b| {
            (a.release_date, a.version.as_str()).cmp(&(b.release_date, b.version.as_str()))
        });

    if let Some(best) = eligible {
        return Some(PickedVersion {
            version: best.version.clone(),
            release_date: best.release_date,
            confidence: ELIGIBLE_CONFIDENCE,
        });
    }

    versions
        .iter()
        .min_by(|a, b| {
            (a.release_date, a.version.as_str()).cmp(&(b.release_date, b.version.as_str()))
        })
        .map(|first| PickedVersion {
            version: first.version.clone(),
            release_date: first.release_date,
            confidence: FALLBACK_CONFIDENCE,
        })
}

/// Pick the most recent version released within the target year exactly.
///
/// Unlike [`pick_version_by_year`] this returns nothing when no release
/// falls inside the year, which made answers vanish for years between
/// releases of slow-moving packages.
#[deprecated(note = "exact-year matching; use pick_version_by_year")]
pub fn pick_version_in_year(versions: &[VersionEntry], target_year: i32) -> Option<String> {
    versions
        .iter()
        .filter(|v| v.release_date.year() == target_year)
        .max_by(|a, b| {
            (a.release_date, a.version.as_str()).cmp(&(b.release_date, b.version.as_str()))
        })
        .map(|v| v.version.clone())
}
