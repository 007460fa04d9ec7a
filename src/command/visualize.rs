//! Visualize command for direct CLI use.
//!
//! Performs the slash-style keyword split on the free-text arguments, then
//! runs the same tool the MCP surface exposes and prints its display output.

use anyhow::Result;
use std::path::PathBuf;

use crate::storage::Storage;
use crate::visualize::{Intent, VisualizationRequest, VisualizeTool};

const USAGE: &str = "Usage: vizor visualize [architecture|dependency] [prompt]\n\
Example: vizor visualize architecture Auth Flow\n\
Example: vizor visualize dependencies package.json";

/// Outcome of splitting the free-text invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInvocation {
    /// Empty input; show usage instead of invoking the tool
    Usage,
    Request { intent: Intent, prompt: String },
}

/// Split a free-text invocation into an intent and a prompt.
///
/// A leading `architecture`, `dependency` or `dependencies` keyword
/// followed by whitespace selects the intent and is stripped; any other
/// input keeps the whole text as the prompt with architecture intent.
pub fn parse_invocation(input: &str) -> ParsedInvocation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedInvocation::Usage;
    }

    let keywords = [
        ("dependencies ", Intent::Dependency),
        ("dependency ", Intent::Dependency),
        ("architecture ", Intent::Architecture),
    ];
    for (keyword, intent) in keywords {
        if let Some(rest) = trimmed.strip_prefix(keyword) {
            return ParsedInvocation::Request {
                intent,
                prompt: rest.trim_start().to_string(),
            };
        }
    }

    ParsedInvocation::Request {
        intent: Intent::Architecture,
        prompt: trimmed.to_string(),
    }
}

/// Run a visualize invocation against the given project root and print the
/// result to stdout.
pub async fn run_visualize(project_root: PathBuf, input: &str) -> Result<()> {
    let request = match parse_invocation(input) {
        ParsedInvocation::Usage => {
            println!("{}", USAGE);
            return Ok(());
        }
        ParsedInvocation::Request { intent, prompt } => VisualizationRequest::new(intent, prompt),
    };

    if let Some(message) = VisualizeTool::validate_params(&request) {
        eprintln!("Error generating visualization: {}", message);
        return Ok(());
    }

    let tool = VisualizeTool::new(Storage::new(project_root));
    let result = tool.execute(&request).await;

    println!("```\n{}\n```", result.return_display);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input_yields_usage() {
        assert_eq!(parse_invocation(""), ParsedInvocation::Usage);
        assert_eq!(parse_invocation("   "), ParsedInvocation::Usage);
    }

    #[test]
    fn test_parse_dependency_keywords() {
        for input in ["dependency package.json", "dependencies package.json"] {
            assert_eq!(
                parse_invocation(input),
                ParsedInvocation::Request {
                    intent: Intent::Dependency,
                    prompt: "package.json".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_parse_architecture_keyword() {
        assert_eq!(
            parse_invocation("architecture Auth Flow"),
            ParsedInvocation::Request {
                intent: Intent::Architecture,
                prompt: "Auth Flow".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_defaults_to_architecture() {
        assert_eq!(
            parse_invocation("how the login service talks to the queue"),
            ParsedInvocation::Request {
                intent: Intent::Architecture,
                prompt: "how the login service talks to the queue".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_bare_keyword_is_a_plain_prompt() {
        // Without a following prompt the keyword is just free text
        assert_eq!(
            parse_invocation("dependencies"),
            ParsedInvocation::Request {
                intent: Intent::Architecture,
                prompt: "dependencies".to_string(),
            }
        );
    }
}
