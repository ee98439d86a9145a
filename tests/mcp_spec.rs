//! MCP server integration tests.
//!
//! Exercises the tool logic through the `test_*` helpers on `McpServer`,
//! over the offline static tables so no network is involved.

use retrostack::mcp::{GetHistoricalStackRequest, McpServer};
use retrostack::models::*;
use retrostack::stack::StackService;
use serde_json::Value;

fn setup() -> McpServer {
    McpServer::new(StackService::offline())
}

fn stack_request(
    language: Language,
    framework: Framework,
    year: i32,
    extras: Vec<ExtraCategory>,
) -> GetHistoricalStackRequest {
    GetHistoricalStackRequest {
        language,
        framework,
        year,
        extras,
    }
}

mod get_historical_stack {
    use super::*;

    #[tokio::test]
    async fn returns_the_stack_as_pretty_json_text() {
        let server = setup();

        let text = server
            .test_get_historical_stack(stack_request(
                Language::Node,
                Framework::Express,
                2020,
                vec![ExtraCategory::Testing],
            ))
            .await
            .expect("tool call succeeds");

        let stack: StackResponse = serde_json::from_str(&text).expect("text is a StackResponse");
        assert_eq!(stack.runtime_version, "14.15.0");
        assert_eq!(stack.packages[0].name, "express");
        assert_eq!(stack.packages[0].category, PackageCategory::Core);
        assert_eq!(stack.packages[1].name, "jest");
        assert!(stack.packages.len() >= 2);

        // Pretty-printed, matching the product's wire format.
        assert!(text.contains('\n'));
    }

    #[tokio::test]
    async fn omits_the_core_package_when_framework_is_none() {
        let server = setup();

        let text = server
            .test_get_historical_stack(stack_request(
                Language::Python,
                Framework::None,
                2022,
                vec![],
            ))
            .await
            .unwrap();

        let stack: StackResponse = serde_json::from_str(&text).unwrap();
        assert!(stack
            .packages
            .iter()
            .all(|p| p.category != PackageCategory::Core));
    }

    #[tokio::test]
    async fn answers_out_of_range_years_with_the_error_document() {
        let server = setup();

        for year in [2014, 2026] {
            let text = server
                .test_get_historical_stack(stack_request(
                    Language::Ruby,
                    Framework::Rails,
                    year,
                    vec![],
                ))
                .await
                .expect("the tool call itself still succeeds");

            let error: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(error["error"], "year_out_of_range");
            assert_eq!(error["message"], "Year must be between 2015 and 2025");
            assert_eq!(error["details"]["provided"], year);
        }
    }

    #[tokio::test]
    async fn accepts_boundary_years() {
        let server = setup();

        for year in [2015, 2025] {
            let text = server
                .test_get_historical_stack(stack_request(
                    Language::Node,
                    Framework::Express,
                    year,
                    vec![],
                ))
                .await
                .unwrap();

            let stack: StackResponse = serde_json::from_str(&text).unwrap();
            assert_eq!(stack.year, year);
            assert_ne!(stack.runtime_version, "unknown");
        }
    }

    #[tokio::test]
    async fn extras_resolve_per_language() {
        let server = setup();

        let text = server
            .test_get_historical_stack(stack_request(
                Language::Python,
                Framework::Django,
                2021,
                vec![ExtraCategory::Testing, ExtraCategory::Orm],
            ))
            .await
            .unwrap();

        let stack: StackResponse = serde_json::from_str(&text).unwrap();
        let names: Vec<_> = stack.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["django", "pytest", "sqlalchemy"]);
    }
}
