//! Visualization request types.
//!
//! These types are used with rmcp's `Parameters<T>` wrapper for automatic
//! deserialization and JSON schema generation, and by the CLI path after
//! keyword parsing. Optional fields are skipped during serialization so a
//! request hashes identically no matter how it was constructed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of diagram the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Architecture,
    Dependency,
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "architecture" => Ok(Intent::Architecture),
            "dependency" | "dependencies" => Ok(Intent::Dependency),
            _ => Err(
                "The 'intent' parameter must be either 'architecture' or 'dependency'.".to_string(),
            ),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Architecture => write!(f, "architecture"),
            Intent::Dependency => write!(f, "dependency"),
        }
    }
}

/// Requested diagram style. Currently advisory; participates in the cache
/// key so changing it re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
    Flowchart,
    Sequence,
    Class,
    Auto,
}

/// Parameters for the visualize tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VisualizationRequest {
    /// Whether to map architecture or dependencies
    pub intent: Intent,
    /// Free-text description of what to visualize
    pub prompt: String,
    /// Optional focus targets (files, directories, package names)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    /// Preferred diagram style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram_type: Option<DiagramType>,
    /// Upper bound on rendered nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<u32>,
    /// Skip the cache probe and re-render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_cache: Option<bool>,
}

impl VisualizationRequest {
    /// Build a minimal request with only the required fields set.
    pub fn new(intent: Intent, prompt: impl Into<String>) -> Self {
        Self {
            intent,
            prompt: prompt.into(),
            targets: None,
            diagram_type: None,
            max_nodes: None,
            refresh_cache: None,
        }
    }
}
