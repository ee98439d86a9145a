use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::{Framework, Language, MAX_YEAR, MIN_YEAR};

/// The role a package plays in an assembled stack.
///
/// `Core` is reserved for the framework itself; the rest mirror the extra
/// categories a caller may request. `Utility` exists for packages that fit
/// no requested category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PackageCategory {
    Core,
    Testing,
    Orm,
    Auth,
    Api,
    Frontend,
    Utility,
}

impl PackageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Testing => "testing",
            Self::Orm => "orm",
            Self::Auth => "auth",
            Self::Api => "api",
            Self::Frontend => "frontend",
            Self::Utility => "utility",
        }
    }
}

/// One resolved package in an assembled stack.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StackPackage {
    pub name: String,
    /// Resolved version string, or the literal "unknown" when the registry
    /// fetch failed.
    pub version: String,
    pub category: PackageCategory,
    pub notes: String,
}

/// The assembled answer for one stack request.
///
/// Produced fresh per request; nothing is persisted or memoized between
/// requests.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StackResponse {
    pub language: Language,
    pub framework: Framework,
    pub year: i32,
    pub runtime_version: String,
    pub package_manager: String,
    pub packages: Vec<StackPackage>,
    pub notes: String,
}

/// Machine-readable error kinds for both API surfaces.
///
/// `UnsupportedCombination` is reserved: mismatched language/framework pairs
/// currently resolve against the language's registry rather than being
/// rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedCombination,
    YearOutOfRange,
    InternalError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::UnsupportedCombination => "unsupported_combination",
            Self::YearOutOfRange => "year_out_of_range",
            Self::InternalError => "internal_error",
        }
    }
}

/// Error document returned instead of a [`StackResponse`].
///
/// Exactly one of the two is produced per request, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            error: ErrorKind::InvalidInput,
            message: message.into(),
            details: None,
        }
    }

    pub fn year_out_of_range(provided: i64) -> Self {
        Self {
            error: ErrorKind::YearOutOfRange,
            message: format!("Year must be between {} and {}", MIN_YEAR, MAX_YEAR),
            details: Some(serde_json::json!({
                "min": MIN_YEAR,
                "max": MAX_YEAR,
                "provided": provided,
            })),
        }
    }

    pub fn internal_error(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            error: ErrorKind::InternalError,
            message: message.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(ErrorKind::YearOutOfRange).unwrap(),
            serde_json::json!("year_out_of_range")
        );
        assert_eq!(
            serde_json::to_value(ErrorKind::InvalidInput).unwrap(),
            serde_json::json!("invalid_input")
        );
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let value =
            serde_json::to_value(ErrorResponse::invalid_input("Missing or invalid 'language' field"))
                .unwrap();
        assert!(value.get("details").is_none());
        assert_eq!(value["error"], "invalid_input");
    }

    #[test]
    fn year_out_of_range_carries_bounds_and_provided() {
        let value = serde_json::to_value(ErrorResponse::year_out_of_range(2031)).unwrap();
        assert_eq!(value["details"]["min"], 2015);
        assert_eq!(value["details"]["max"], 2025);
        assert_eq!(value["details"]["provided"], 2031);
    }
}
