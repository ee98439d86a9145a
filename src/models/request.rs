use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::response::ErrorResponse;

/// Years the lookup tables cover, inclusive.
pub const MIN_YEAR: i32 = 2015;
pub const MAX_YEAR: i32 = 2025;

/// A language ecosystem the service can answer for.
///
/// Each language maps to one public package registry (npm, PyPI, RubyGems).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Node,
    Python,
    Ruby,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Python => "python",
            Self::Ruby => "ruby",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "node" => Some(Self::Node),
            "python" => Some(Self::Python),
            "ruby" => Some(Self::Ruby),
            _ => None,
        }
    }
}

/// A web framework the service can resolve a core package for.
///
/// `None` means "no framework": the response carries runtime and extras only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Express,
    Django,
    Flask,
    Rails,
    None,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Django => "django",
            Self::Flask => "flask",
            Self::Rails => "rails",
            Self::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "express" => Some(Self::Express),
            "django" => Some(Self::Django),
            "flask" => Some(Self::Flask),
            "rails" => Some(Self::Rails),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// An optional package category a caller may request alongside the framework.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtraCategory {
    Testing,
    Orm,
    Auth,
    Api,
    Frontend,
}

impl ExtraCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testing => "testing",
            Self::Orm => "orm",
            Self::Auth => "auth",
            Self::Api => "api",
            Self::Frontend => "frontend",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "testing" => Some(Self::Testing),
            "orm" => Some(Self::Orm),
            "auth" => Some(Self::Auth),
            "api" => Some(Self::Api),
            "frontend" => Some(Self::Frontend),
            _ => None,
        }
    }
}

/// A validated stack lookup request.
///
/// Construct via [`validate_stack_request`] (HTTP path, raw JSON in) or
/// [`StackRequest::new`] (typed path); both enforce the extras set
/// semantics, so there is deliberately no `Deserialize`. Extras behave as a
/// set: duplicates are dropped, first occurrence wins, and response ordering
/// follows the order requested.
#[derive(Debug, Clone, Serialize)]
pub struct StackRequest {
    pub language: Language,
    pub framework: Framework,
    pub year: i32,
    #[serde(default)]
    pub extras: Vec<ExtraCategory>,
}

impl StackRequest {
    pub fn new(
        language: Language,
        framework: Framework,
        year: i32,
        extras: Vec<ExtraCategory>,
    ) -> Self {
        Self {
            language,
            framework,
            year,
            extras: dedupe_extras(extras),
        }
    }
}

fn dedupe_extras(extras: Vec<ExtraCategory>) -> Vec<ExtraCategory> {
    let mut seen = Vec::with_capacity(extras.len());
    for extra in extras {
        if !seen.contains(&extra) {
            seen.push(extra);
        }
    }
    seen
}

/// Validate a raw JSON body into a [`StackRequest`].
///
/// Fail-fast: the first violation encountered becomes the `ErrorResponse`,
/// checked in wire order (language, framework, year, extras). Runs before
/// any network activity.
pub fn validate_stack_request(input: &Value) -> Result<StackRequest, ErrorResponse> {
    let Some(body) = input.as_object() else {
        return Err(ErrorResponse::invalid_input("Request body must be an object"));
    };

    let language = match body.get("language").and_then(Value::as_str) {
        Some(raw) => Language::from_str(raw).ok_or_else(|| {
            ErrorResponse::invalid_input("Invalid language. Must be one of: node, python, ruby")
        })?,
        None => {
            return Err(ErrorResponse::invalid_input(
                "Missing or invalid 'language' field",
            ))
        }
    };

    let framework = match body.get("framework").and_then(Value::as_str) {
        Some(raw) => Framework::from_str(raw).ok_or_else(|| {
            ErrorResponse::invalid_input(
                "Invalid framework. Must be one of: express, django, flask, rails, none",
            )
        })?,
        None => {
            return Err(ErrorResponse::invalid_input(
                "Missing or invalid 'framework' field",
            ))
        }
    };

    let year = match body.get("year").and_then(Value::as_i64) {
        Some(year) => year,
        None => {
            return Err(ErrorResponse::invalid_input(
                "Missing or invalid 'year' field",
            ))
        }
    };
    // Range-check before narrowing; an i32 cast would wrap 64-bit years
    // back into range.
    if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
        return Err(ErrorResponse::year_out_of_range(year));
    }
    let year = year as i32;

    let extras = match body.get("extras") {
        None => Vec::new(),
        Some(Value::Array(items)) => {
            let mut extras = Vec::with_capacity(items.len());
            for item in items {
                let category = item
                    .as_str()
                    .and_then(ExtraCategory::from_str)
                    .ok_or_else(|| {
                        ErrorResponse::invalid_input(
                            "Invalid extra category. Must be one of: testing, orm, auth, api, frontend",
                        )
                    })?;
                extras.push(category);
            }
            dedupe_extras(extras)
        }
        Some(_) => return Err(ErrorResponse::invalid_input("'extras' must be an array")),
    };

    Ok(StackRequest {
        language,
        framework,
        year,
        extras,
    })
}
