//! Dependency manifest parsing.
//!
//! Reads a `package.json` from a target directory and converts it into the
//! generic tree shape consumed by the renderer. No other manifest formats
//! are attempted and parent directories are never searched.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::renderer::TreeNode;

/// The manifest filename looked up inside the target directory.
const MANIFEST_FILENAME: &str = "package.json";

/// Dependency sections in the order they appear in the rendered tree.
const SECTIONS: &[&str] = &["dependencies", "devDependencies", "peerDependencies"];

/// Failure modes of `parse_manifest`.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("No package.json found in {dir}. Visualizer requires a manifest for dependency mapping.")]
    NotFound { dir: String },
    #[error("Failed to read or parse package.json: {reason}")]
    Read { reason: String },
}

/// Parsed `package.json` contents. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: Option<HashMap<String, String>>,
    pub dev_dependencies: Option<HashMap<String, String>>,
    pub peer_dependencies: Option<HashMap<String, String>>,
}

/// Read and parse `package.json` from the given directory.
pub async fn parse_manifest(dir: &Path) -> Result<DependencyManifest, ManifestError> {
    let manifest_path = dir.join(MANIFEST_FILENAME);

    let content = match tokio::fs::read_to_string(&manifest_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ManifestError::NotFound {
                dir: dir.display().to_string(),
            });
        }
        Err(e) => {
            return Err(ManifestError::Read {
                reason: e.to_string(),
            });
        }
    };

    serde_json::from_str(&content).map_err(|e| ManifestError::Read {
        reason: e.to_string(),
    })
}

/// Convert a manifest into a tree rooted at `name@version`.
///
/// Sections appear in fixed order and only when non-empty; leaves within a
/// section are sorted by dependency name for deterministic output.
pub fn manifest_to_tree(manifest: &DependencyManifest) -> TreeNode {
    let root_label = match (&manifest.name, &manifest.version) {
        (Some(name), Some(version)) => format!("{}@{}", name, version),
        (Some(name), None) => name.clone(),
        (None, _) => "project".to_string(),
    };

    let mut root = TreeNode::leaf(root_label);

    let section_deps = [
        &manifest.dependencies,
        &manifest.dev_dependencies,
        &manifest.peer_dependencies,
    ];
    for (title, deps) in SECTIONS.iter().zip(section_deps) {
        let Some(deps) = deps else { continue };
        if deps.is_empty() {
            continue;
        }

        let mut entries: Vec<(&String, &String)> = deps.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        let children = entries
            .into_iter()
            .map(|(name, version)| TreeNode::leaf(format!("{}: {}", name, version)))
            .collect();
        root.children.push(TreeNode::with_children(*title, children));
    }

    root
}
