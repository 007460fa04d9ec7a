//! MCP server startup logic.
//!
//! Target-directory resolution happens in main.rs; this module only wires
//! the visualize tool into an rmcp stdio server and runs it.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{error, info};

use crate::storage::Storage;
use crate::visualize::VisualizeTool;

use super::server::VizorMcpServer;

/// Run the MCP server over stdio.
///
/// # Arguments
/// * `project_root` - Pre-resolved project root the visualize tool operates on
pub async fn run_mcp_server(project_root: PathBuf) -> Result<()> {
    info!("🔧 Starting Vizor MCP Tool Server...");
    info!("📝 Stdio mode (using rmcp)");
    info!("📁 Project root: {}", project_root.display());

    let tool = VisualizeTool::new(Storage::new(project_root));
    let server = VizorMcpServer::new(tool);

    run_server(server).await
}

/// Run the MCP server with the given server instance.
async fn run_server(server: VizorMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("✅ MCP tool server started");
    info!("🔗 Ready for MCP client connections");

    let service = server.serve(stdio()).await.map_err(|e| {
        error!("Failed to start MCP service: {:?}", e);
        anyhow::anyhow!("Failed to start MCP service: {:?}", e)
    })?;

    service.waiting().await.map_err(|e| {
        error!("MCP service error: {:?}", e);
        anyhow::anyhow!("MCP service error: {:?}", e)
    })?;

    info!("MCP server shutting down");
    Ok(())
}
