//! MCP server exposing the historical stack lookup as a single tool.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};

use crate::models::{ErrorResponse, StackRequest, MAX_YEAR, MIN_YEAR};
use crate::stack::StackService;

#[derive(Clone)]
pub struct McpServer {
    service: StackService,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(service: StackService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    // ============================================================
    // Test helpers - expose tool logic for testing
    // ============================================================

    /// Run the lookup and render the tool's text payload.
    ///
    /// A year outside the supported range answers with the
    /// `year_out_of_range` error document as text; the tool call itself
    /// still succeeds.
    pub async fn test_get_historical_stack(
        &self,
        request: GetHistoricalStackRequest,
    ) -> Result<String, McpError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&request.year) {
            let error = ErrorResponse::year_out_of_range(i64::from(request.year));
            return serde_json::to_string_pretty(&error)
                .map_err(|e| McpError::internal_error(e.to_string(), None));
        }

        let request = StackRequest::new(
            request.language,
            request.framework,
            request.year,
            request.extras,
        );
        let response = self.service.assemble(&request).await;

        serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }
}

#[tool_router]
impl McpServer {
    #[tool(
        description = "Returns historically accurate technology stack recommendations for a given language, framework, and year. Resolves the runtime and package manager current in that year plus the versions of the framework and any requested extra packages (testing, orm, auth, api, frontend) that were available then."
    )]
    async fn get_historical_stack(
        &self,
        params: Parameters<GetHistoricalStackRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.test_get_historical_stack(params.0).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "retrostack".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"RetroStack answers one question: what runtime, package manager, and
package versions were current for a language and framework in a given year?

Call get_historical_stack with a language (node, python, ruby), a framework
(express, django, flask, rails, or none), a year between 2015 and 2025, and
optionally a list of extras (testing, orm, auth, api, frontend).

The response lists the runtime and package-manager versions for that year and
one package entry per framework/extra, each with the latest version released
on or before December 31 of the year. When a package's first release
postdates the year, the first-ever release is returned instead and the notes
flag it as possibly not having existed yet. A failed registry lookup degrades
to a version of "unknown" rather than failing the whole request."#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(service: StackService) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let server = McpServer::new(service);
    let server = server.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
