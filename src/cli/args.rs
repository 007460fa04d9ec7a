use clap::{Parser, Subcommand};

/// Vizor CLI - ASCII architecture and dependency diagrams with MCP server support
#[derive(Parser)]
#[command(name = "vizor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as MCP server over stdio
    #[arg(long)]
    pub mcp: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root (auto-detects git root if absent)
    #[arg(short = 'w', long)]
    pub workspace_root: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an ASCII diagram from a free-text request
    Visualize {
        /// Optional intent keyword (architecture|dependency|dependencies) followed by a prompt
        #[arg(trailing_var_arg = true)]
        input: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualize_collects_trailing_words() {
        let cli = Cli::parse_from(["vizor", "visualize", "architecture", "Auth", "Flow"]);
        let Some(Commands::Visualize { input }) = cli.command else {
            panic!("expected visualize subcommand");
        };
        assert_eq!(input.join(" "), "architecture Auth Flow");
    }

    #[test]
    fn test_mcp_flag() {
        let cli = Cli::parse_from(["vizor", "--mcp", "-w", "/tmp/project"]);
        assert!(cli.mcp);
        assert_eq!(cli.workspace_root.as_deref(), Some("/tmp/project"));
    }
}
