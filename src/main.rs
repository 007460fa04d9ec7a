use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod command;
mod mcp;
mod storage;
mod visualize;

use cli::args::{Cli, Commands};
use cli::paths::resolve_project_root;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let project_root = resolve_project_root(cli.workspace_root)?;

    // If --mcp flag is set, run as MCP server
    if cli.mcp {
        return mcp::run_mcp_server(project_root).await;
    }

    // Otherwise, handle subcommands
    match cli.command {
        Some(Commands::Visualize { input }) => {
            command::run_visualize(project_root, &input.join(" ")).await?;
        }
        None => {
            // No command specified, show help
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!(
                "Use 'vizor visualize <prompt>' to render a diagram or 'vizor --mcp' to start the MCP server."
            );
        }
    }

    Ok(())
}
