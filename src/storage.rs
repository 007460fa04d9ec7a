//! On-disk storage locations scoped to a single project.
//!
//! Each project root maps to its own directory under the system temp dir,
//! named by a UUID v5 of the root path so repeated runs against the same
//! project land in the same place.

use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Namespace UUID for deriving project-specific directory names.
const VIZOR_NAMESPACE: Uuid = Uuid::from_bytes([
    0x2f, 0x1c, 0x5e, 0x77, 0x41, 0x0b, 0x4a, 0x9e, 0x8d, 0x13, 0x5a, 0x20, 0xc6, 0x9b, 0x04, 0x3d,
]);

/// Compute a UUID v5 from a project root path.
/// UUID v5 is deterministic - same path always produces the same UUID.
pub fn compute_path_uuid(path: &Path) -> String {
    // Normalize path to forward slashes for consistent naming across platforms
    let normalized = path.to_string_lossy().replace('\\', "/");
    Uuid::new_v5(&VIZOR_NAMESPACE, normalized.as_bytes()).to_string()
}

/// Storage-root provider for a project.
#[derive(Debug, Clone)]
pub struct Storage {
    project_root: PathBuf,
    temp_root: PathBuf,
}

impl Storage {
    /// Create a storage provider rooted at the system temp directory.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            temp_root: std::env::temp_dir(),
        }
    }

    /// Create a storage provider with a custom temp root. Used by tests to
    /// keep cache files inside a scratch directory.
    pub fn with_temp_root(project_root: PathBuf, temp_root: PathBuf) -> Self {
        Self {
            project_root,
            temp_root,
        }
    }

    /// The project root this storage is scoped to.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Temp directory reserved for this project. Not created here; callers
    /// create the subdirectories they need.
    pub fn project_temp_dir(&self) -> PathBuf {
        self.temp_root
            .join("vizor")
            .join(compute_path_uuid(&self.project_root))
    }
}
