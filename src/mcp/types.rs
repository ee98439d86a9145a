//! Request types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::Deserialize;

use crate::models::{ExtraCategory, Framework, Language};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetHistoricalStackRequest {
    #[schemars(description = "Programming language")]
    pub language: Language,
    #[schemars(description = "Web framework")]
    pub framework: Framework,
    #[schemars(description = "Target year", range(min = 2015, max = 2025))]
    pub year: i32,
    #[schemars(description = "Additional package categories")]
    #[serde(default)]
    pub extras: Vec<ExtraCategory>,
}
