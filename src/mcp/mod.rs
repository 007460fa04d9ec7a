//! MCP (Model Context Protocol) server implementation using rmcp.
//!
//! The server exposes the visualize pipeline as a single `visualize` tool;
//! request parameters deserialize straight into `VisualizationRequest` with
//! a schemars-generated schema.

mod handlers;
mod server;

// Re-export run_mcp_server from handlers
pub use handlers::run_mcp_server;
pub use server::VizorMcpServer;
