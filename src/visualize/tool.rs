//! The visualize tool itself.
//!
//! One request per invocation, no state carried across calls: probe the
//! cache, dispatch by intent, render, persist, return. Every failure mode
//! is converted into a `ToolResult` here; nothing propagates to the caller
//! as an unhandled error.

use std::path::PathBuf;
use tracing::warn;

use crate::storage::Storage;

use super::cache::VisualizeCache;
use super::manifest::{manifest_to_tree, parse_manifest};
use super::renderer::{render_box, render_tree};
use super::types::{Intent, VisualizationRequest};

/// Nominal box width for the architecture placeholder render.
const ARCHITECTURE_BOX_WIDTH: usize = 40;

/// Classification of a failed tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorType {
    ExecutionFailed,
}

/// Error payload attached to a failed `ToolResult`.
#[derive(Debug, Clone)]
pub struct ToolError {
    pub message: String,
    pub error_type: ToolErrorType,
}

/// Outcome of one visualize call.
///
/// `llm_content` is the machine-readable payload; `return_display` is the
/// human-readable rendering of the same outcome.
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub llm_content: String,
    pub return_display: String,
    pub error: Option<ToolError>,
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Renders visualization requests against one target directory.
pub struct VisualizeTool {
    cache: VisualizeCache,
    target_dir: PathBuf,
}

impl VisualizeTool {
    /// Create a tool scoped to the storage's project root.
    pub fn new(storage: Storage) -> Self {
        let target_dir = storage.project_root().to_path_buf();
        Self {
            cache: VisualizeCache::new(storage),
            target_dir,
        }
    }

    /// Validate request fields that the type system cannot enforce.
    /// Returns an error message for the caller, or `None` when valid.
    pub fn validate_params(params: &VisualizationRequest) -> Option<String> {
        if params.prompt.trim().is_empty() {
            return Some("The 'prompt' parameter cannot be empty.".to_string());
        }
        None
    }

    /// Progress line shown while the tool runs.
    pub fn description(params: &VisualizationRequest) -> String {
        format!(
            "Visualizing codebase architecture ({}): {}",
            params.intent, params.prompt
        )
    }

    /// Run one request to completion.
    pub async fn execute(&self, params: &VisualizationRequest) -> ToolResult {
        match self.run(params).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Visualize execution failed: {:#}", e);
                let raw = format!("Error during visualize operation: {}", e);
                ToolResult {
                    llm_content: raw.clone(),
                    return_display: "Error: An unexpected error occurred.".to_string(),
                    error: Some(ToolError {
                        message: raw,
                        error_type: ToolErrorType::ExecutionFailed,
                    }),
                }
            }
        }
    }

    async fn run(&self, params: &VisualizationRequest) -> anyhow::Result<ToolResult> {
        let request_hash = VisualizeCache::generate_hash(params)?;

        if !params.refresh_cache.unwrap_or(false) {
            if let Some(cached) = self.cache.get(&request_hash).await {
                return Ok(ToolResult {
                    return_display: format!(
                        "Successfully visualized from cache:\n{}",
                        cached.ascii_diagram
                    ),
                    llm_content: cached.ascii_diagram,
                    error: None,
                });
            }
        }

        let diagram = match params.intent {
            Intent::Dependency => match parse_manifest(&self.target_dir).await {
                Ok(manifest) => render_tree(&manifest_to_tree(&manifest)),
                Err(e) => {
                    // Manifest failures are surfaced verbatim and never cached
                    let message = e.to_string();
                    let content = format!("Could not parse dependencies: {}", message);
                    return Ok(ToolResult {
                        llm_content: content.clone(),
                        return_display: content,
                        error: Some(ToolError {
                            message,
                            error_type: ToolErrorType::ExecutionFailed,
                        }),
                    });
                }
            },
            Intent::Architecture => render_box(
                &format!("Visualization: {}", params.prompt),
                ARCHITECTURE_BOX_WIDTH,
            ),
        };

        self.cache.set(&request_hash, &diagram).await?;

        Ok(ToolResult {
            return_display: format!("Successfully visualized:\n{}", diagram),
            llm_content: diagram,
            error: None,
        })
    }
}
