//! MCP server implementation.
//!
//! This module contains the VizorMcpServer struct and its tool routing.

use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use std::sync::Arc;
use tracing::info;

use crate::visualize::{VisualizationRequest, VisualizeTool};

/// Vizor MCP Server
#[derive(Clone)]
pub struct VizorMcpServer {
    tool: Arc<VisualizeTool>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VizorMcpServer {
    /// Create a new Vizor MCP server around a configured visualize tool.
    pub fn new(tool: VisualizeTool) -> Self {
        Self {
            tool: Arc::new(tool),
            tool_router: Self::tool_router(),
        }
    }

    /// Render an ASCII diagram of the project.
    #[tool(
        name = "visualize",
        description = r#"Render a deterministic ASCII diagram of the current project.

Two intents are supported:
* "architecture" - renders a labeled box for the given prompt. A placeholder pending richer architecture analysis; it never fails.
* "dependency" - parses the project's package.json and renders its dependency sections (dependencies, devDependencies, peerDependencies) as a tree, sorted for stable output.

Results are memoized in an on-disk cache keyed by a canonical hash of the request; pass refresh_cache to force a re-render. The tool requires a manifest for dependency mapping and reports a tool-level error when none is found."#
    )]
    async fn visualize(
        &self,
        Parameters(args): Parameters<VisualizationRequest>,
    ) -> Result<CallToolResult, McpError> {
        if let Some(message) = VisualizeTool::validate_params(&args) {
            return Ok(CallToolResult::error(vec![Content::text(message)]));
        }

        info!("{}", VisualizeTool::description(&args));
        let result = self.tool.execute(&args).await;

        if result.is_error() {
            Ok(CallToolResult::error(vec![Content::text(
                result.llm_content,
            )]))
        } else {
            Ok(CallToolResult::success(vec![Content::text(
                result.llm_content,
            )]))
        }
    }
}

#[tool_handler]
impl ServerHandler for VizorMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "vizor".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Vizor MCP Server renders ASCII architecture and dependency diagrams.".to_string(),
            ),
        }
    }
}
