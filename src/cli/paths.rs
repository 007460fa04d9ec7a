use anyhow::{Context, Result};
use std::path::PathBuf;

/// Find the git root directory by searching upward from current directory.
pub fn find_git_root() -> Option<PathBuf> {
    let current = std::env::current_dir().ok()?;
    let mut path = current.as_path();

    loop {
        if path.join(".git").exists() {
            return Some(path.to_path_buf());
        }
        path = path.parent()?;
    }
}

/// Resolve the project root the visualize tool operates on.
///
/// An explicit path wins; otherwise the enclosing git root, falling back to
/// the current directory.
pub fn resolve_project_root(workspace_root: Option<String>) -> Result<PathBuf> {
    if let Some(path) = workspace_root {
        PathBuf::from(&path)
            .canonicalize()
            .with_context(|| format!("Failed to canonicalize provided workspace root: {}", path))
    } else {
        match find_git_root() {
            Some(root) => Ok(root),
            None => std::env::current_dir().context("Failed to get current directory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_explicit_root() {
        let tmp = TempDir::new().unwrap();
        let resolved = resolve_project_root(Some(tmp.path().to_string_lossy().to_string())).unwrap();
        assert_eq!(resolved, tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_explicit_root_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let err = resolve_project_root(Some(missing.to_string_lossy().to_string())).unwrap_err();
        assert!(err.to_string().contains("Failed to canonicalize"));
    }
}
