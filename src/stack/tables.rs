//! Static lookup tables keyed by (language, year).

use crate::models::{ExtraCategory, Framework, Language};

/// Runtime and package-manager versions for one (language, year) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub runtime: &'static str,
    pub package_manager: &'static str,
}

const UNKNOWN: RuntimeInfo = RuntimeInfo {
    runtime: "unknown",
    package_manager: "unknown",
};

/// Resolve the runtime and package manager current in a given year.
///
/// Versions are the last patch release of the line that was mainstream that
/// year. Years outside the table come back as the literal "unknown".
pub fn runtime_for(language: Language, year: i32) -> RuntimeInfo {
    let cell = |runtime, package_manager| RuntimeInfo {
        runtime,
        package_manager,
    };

    match language {
        Language::Node => match year {
            2015 => cell("4.9.1", "npm@3.10.10"),
            2016 => cell("6.17.1", "npm@3.10.10"),
            2017 => cell("8.17.0", "npm@5.10.0"),
            2018 => cell("10.24.1", "npm@6.14.12"),
            2019 => cell("12.22.12", "npm@6.14.16"),
            2020 => cell("14.15.0", "npm@6.14.8"),
            2021 => cell("16.20.2", "npm@8.19.4"),
            2022 => cell("18.12.0", "npm@8.19.2"),
            2023 => cell("20.9.0", "npm@9.8.1"),
            2024 => cell("20.11.0", "npm@10.2.4"),
            2025 => cell("22.0.0", "npm@10.5.0"),
            _ => UNKNOWN,
        },
        Language::Python => match year {
            2015 => cell("3.4.10", "pip@7.1.2"),
            2016 => cell("3.5.10", "pip@8.1.2"),
            2017 => cell("3.6.15", "pip@9.0.3"),
            2018 => cell("3.7.17", "pip@10.0.1"),
            2019 => cell("3.7.17", "pip@19.3.1"),
            2020 => cell("3.8.18", "pip@20.3.4"),
            2021 => cell("3.9.18", "pip@21.3.1"),
            2022 => cell("3.10.13", "pip@22.3.1"),
            2023 => cell("3.11.7", "pip@23.3.2"),
            2024 => cell("3.12.1", "pip@24.0"),
            2025 => cell("3.12.2", "pip@24.0"),
            _ => UNKNOWN,
        },
        Language::Ruby => match year {
            2015 => cell("2.2.10", "bundler@1.10.6"),
            2016 => cell("2.3.8", "bundler@1.13.7"),
            2017 => cell("2.4.10", "bundler@1.15.4"),
            2018 => cell("2.5.9", "bundler@1.16.6"),
            2019 => cell("2.6.10", "bundler@2.0.2"),
            2020 => cell("2.7.8", "bundler@2.1.4"),
            2021 => cell("3.0.6", "bundler@2.2.33"),
            2022 => cell("3.1.4", "bundler@2.3.26"),
            2023 => cell("3.2.2", "bundler@2.4.22"),
            2024 => cell("3.3.0", "bundler@2.5.6"),
            2025 => cell("3.3.0", "bundler@2.5.6"),
            _ => UNKNOWN,
        },
    }
}

/// The registry package backing a framework choice, or `None` for no
/// framework.
pub fn framework_package(framework: Framework) -> Option<&'static str> {
    match framework {
        Framework::Express => Some("express"),
        Framework::Django => Some("django"),
        Framework::Flask => Some("flask"),
        Framework::Rails => Some("rails"),
        Framework::None => None,
    }
}

/// The canonical package for an extra category in a language's ecosystem.
pub fn extra_package(language: Language, extra: ExtraCategory) -> &'static str {
    match (language, extra) {
        (Language::Node, ExtraCategory::Testing) => "jest",
        (Language::Node, ExtraCategory::Orm) => "sequelize",
        (Language::Node, ExtraCategory::Auth) => "passport",
        (Language::Node, ExtraCategory::Api) => "axios",
        (Language::Node, ExtraCategory::Frontend) => "react",
        (Language::Python, ExtraCategory::Testing) => "pytest",
        (Language::Python, ExtraCategory::Orm) => "sqlalchemy",
        (Language::Python, ExtraCategory::Auth) => "django-allauth",
        (Language::Python, ExtraCategory::Api) => "requests",
        (Language::Python, ExtraCategory::Frontend) => "jinja2",
        (Language::Ruby, ExtraCategory::Testing) => "rspec",
        (Language::Ruby, ExtraCategory::Orm) => "activerecord",
        (Language::Ruby, ExtraCategory::Auth) => "devise",
        (Language::Ruby, ExtraCategory::Api) => "faraday",
        (Language::Ruby, ExtraCategory::Frontend) => "webpacker",
    }
}

/// A short human label for the role an extra plays in the stack.
pub fn extra_notes(extra: ExtraCategory) -> &'static str {
    match extra {
        ExtraCategory::Testing => "Testing framework",
        ExtraCategory::Orm => "SQL ORM",
        ExtraCategory::Auth => "Authentication",
        ExtraCategory::Api => "HTTP client",
        ExtraCategory::Frontend => "Frontend library",
    }
}
