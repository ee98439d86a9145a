//! Stack assembly: orchestrates registry adapters and the version picker.

mod picker;
mod tables;

pub use picker::{
    pick_version_by_year, PickedVersion, ELIGIBLE_CONFIDENCE, FALLBACK_CONFIDENCE,
};
#[allow(deprecated)]
pub use picker::pick_version_in_year;
pub use tables::{extra_notes, extra_package, framework_package, runtime_for, RuntimeInfo};

use std::sync::Arc;

use futures::future::join_all;

use crate::models::{Language, PackageCategory, StackPackage, StackRequest, StackResponse};
use crate::registry::{NpmRegistry, PypiRegistry, RubyGemsRegistry, StaticVersions, VersionSource};

/// Confidence below this threshold earns the package a caveat in the
/// response notes.
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Assembles a [`StackResponse`] for a validated request.
///
/// Holds one version source per language; cloning shares them. No state is
/// kept between requests.
#[derive(Clone)]
pub struct StackService {
    node: Arc<dyn VersionSource>,
    python: Arc<dyn VersionSource>,
    ruby: Arc<dyn VersionSource>,
}

impl StackService {
    /// Sources backed by the live public registries.
    pub fn live() -> Self {
        Self {
            node: Arc::new(NpmRegistry::new()),
            python: Arc::new(PypiRegistry::new()),
            ruby: Arc::new(RubyGemsRegistry::new()),
        }
    }

    /// Sources backed by the bundled static tables.
    pub fn offline() -> Self {
        Self {
            node: Arc::new(StaticVersions),
            python: Arc::new(StaticVersions),
            ruby: Arc::new(StaticVersions),
        }
    }

    /// Explicit sources per language (tests inject scripted stubs here).
    pub fn with_sources(
        node: Arc<dyn VersionSource>,
        python: Arc<dyn VersionSource>,
        ruby: Arc<dyn VersionSource>,
    ) -> Self {
        Self { node, python, ruby }
    }

    fn source_for(&self, language: Language) -> &dyn VersionSource {
        match language {
            Language::Node => self.node.as_ref(),
            Language::Python => self.python.as_ref(),
            Language::Ruby => self.ruby.as_ref(),
        }
    }

    /// Assemble the response for a validated request.
    ///
    /// The fetch plan is framework first (when present), then extras in
    /// request order; fetches run concurrently but results keep plan order.
    /// A failed fetch degrades to an "unknown"-version entry rather than
    /// failing the request; an empty history drops the entry entirely.
    pub async fn assemble(&self, request: &StackRequest) -> StackResponse {
        let runtime = runtime_for(request.language, request.year);

        let mut plan: Vec<(&'static str, PackageCategory, String)> = Vec::new();
        if let Some(name) = framework_package(request.framework) {
            plan.push((
                name,
                PackageCategory::Core,
                format!("{} framework", name),
            ));
        }
        for &extra in &request.extras {
            plan.push((
                extra_package(request.language, extra),
                extra.into(),
                extra_notes(extra).to_string(),
            ));
        }

        let fetches = plan.into_iter().map(|(name, category, notes)| {
            self.resolve_package(request.language, request.year, name, category, notes)
        });

        let mut packages = Vec::new();
        let mut low_confidence = Vec::new();
        for resolved in join_all(fetches).await {
            let Some((package, confidence)) = resolved else {
                continue;
            };
            if confidence < LOW_CONFIDENCE_THRESHOLD {
                low_confidence.push(package.name.clone());
            }
            packages.push(package);
        }

        let mut notes = format!(
            "{} {} was the stable version in {}.",
            request.language.as_str(),
            runtime.runtime,
            request.year
        );
        if !low_confidence.is_empty() {
            notes.push_str(&format!(
                " Note: {} may not have existed in {}.",
                low_confidence.join(", "),
                request.year
            ));
        }

        StackResponse {
            language: request.language,
            framework: request.framework,
            year: request.year,
            runtime_version: runtime.runtime.to_string(),
            package_manager: runtime.package_manager.to_string(),
            packages,
            notes,
        }
    }

    /// Fetch and pick one package, degrading failures to an "unknown" entry.
    ///
    /// Returns the package plus the picker's confidence (failures count as
    /// full confidence so they never trigger the caveat; their note already
    /// says what happened).
    async fn resolve_package(
        &self,
        language: Language,
        year: i32,
        name: &'static str,
        category: PackageCategory,
        notes: String,
    ) -> Option<(StackPackage, f64)> {
        match self.source_for(language).fetch_versions(name).await {
            Ok(versions) => {
                let picked = pick_version_by_year(&versions, year)?;
                Some((
                    StackPackage {
                        name: name.to_string(),
                        version: picked.version,
                        category,
                        notes,
                    },
                    picked.confidence,
                ))
            }
            Err(error) => {
                tracing::warn!(package = name, %error, "registry fetch failed");
                Some((
                    StackPackage {
                        name: name.to_string(),
                        version: "unknown".to_string(),
                        category,
                        notes: format!("Failed to fetch: {}", error),
                    },
                    1.0,
                ))
            }
        }
    }
}

impl From<crate::models::ExtraCategory> for PackageCategory {
    fn from(extra: crate::models::ExtraCategory) -> Self {
        use crate::models::ExtraCategory;
        match extra {
            ExtraCategory::Testing => PackageCategory::Testing,
            ExtraCategory::Orm => PackageCategory::Orm,
            ExtraCategory::Auth => PackageCategory::Auth,
            ExtraCategory::Api => PackageCategory::Api,
            ExtraCategory::Frontend => PackageCategory::Frontend,
        }
    }
}
