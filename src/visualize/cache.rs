//! Render cache for visualization requests.
//!
//! Diagrams are memoized on disk, one JSON file per request hash, under the
//! project-scoped temp directory. Reads are best-effort: any failure is a
//! cache miss, never an error surfaced to the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tracing::debug;

use crate::storage::Storage;

/// Subdirectory of the project temp dir holding cache entries.
const CACHE_DIR_NAME: &str = "visualize-cache";

/// A single memoized diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub hash: String,
    pub ascii_diagram: String,
    /// Write time in milliseconds since epoch
    pub timestamp: i64,
}

/// Content-addressed diagram cache.
pub struct VisualizeCache {
    storage: Storage,
}

impl VisualizeCache {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Compute the canonical SHA-256 fingerprint of a request.
    ///
    /// Object keys are sorted lexicographically at every level before
    /// hashing, so two structurally-equal requests hash identically no
    /// matter how they were constructed or serialized. This is a content
    /// fingerprint, not a security boundary.
    pub fn generate_hash<T: Serialize>(request: &T) -> Result<String> {
        let value =
            serde_json::to_value(request).context("Failed to serialize request for hashing")?;

        let mut canonical = String::new();
        write_canonical(&value, &mut canonical);

        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Look up a cached diagram. Absent, unreadable, and unparseable
    /// entries all count as a miss.
    pub async fn get(&self, hash: &str) -> Option<CacheEntry> {
        let path = match self.cache_dir().await {
            Ok(dir) => dir.join(format!("{}.json", hash)),
            Err(e) => {
                debug!("Cache directory unavailable, treating as miss: {}", e);
                return None;
            }
        };

        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(_) => return None,
        };

        match serde_json::from_str(&data) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Discarding unparseable cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Persist a rendered diagram, overwriting any existing entry for the
    /// same hash. The content is written in one call so racing writers for
    /// one hash cannot interleave.
    pub async fn set(&self, hash: &str, ascii_diagram: &str) -> Result<()> {
        let path = self.cache_dir().await?.join(format!("{}.json", hash));
        let entry = CacheEntry {
            hash: hash.to_string(),
            ascii_diagram: ascii_diagram.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        let content = serde_json::to_string(&entry).context("Failed to serialize cache entry")?;
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write cache entry to {}", path.display()))
    }

    /// The cache directory, created on demand. Creation is recursive and
    /// idempotent, safe to race.
    async fn cache_dir(&self) -> Result<PathBuf> {
        let dir = self.storage.project_temp_dir().join(CACHE_DIR_NAME);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
        Ok(dir)
    }
}

/// Append the canonical JSON rendering of `value` to `out`, with object
/// keys in sorted order at every nesting level.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();

            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualize::types::{Intent, VisualizationRequest};
    use tempfile::TempDir;

    fn scratch_cache(tmp: &TempDir) -> VisualizeCache {
        let storage = Storage::with_temp_root(
            tmp.path().join("project"),
            tmp.path().join("tmp"),
        );
        VisualizeCache::new(storage)
    }

    #[test]
    fn test_hash_is_sha256_hex() {
        let request = VisualizationRequest::new(Intent::Architecture, "Auth flow");
        let hash = VisualizeCache::generate_hash(&request).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_independent_of_field_order() {
        let request = VisualizationRequest::new(Intent::Architecture, "Auth flow");

        // The same request arriving as JSON with fields in reverse order
        let reordered: Value =
            serde_json::from_str(r#"{"prompt":"Auth flow","intent":"architecture"}"#).unwrap();

        assert_eq!(
            VisualizeCache::generate_hash(&request).unwrap(),
            VisualizeCache::generate_hash(&reordered).unwrap(),
        );
    }

    #[test]
    fn test_hash_differs_across_request_corpus() {
        let mut corpus = vec![
            VisualizationRequest::new(Intent::Architecture, "Auth flow"),
            VisualizationRequest::new(Intent::Dependency, "Auth flow"),
            VisualizationRequest::new(Intent::Architecture, "Auth flow "),
        ];
        corpus.push({
            let mut r = VisualizationRequest::new(Intent::Architecture, "Auth flow");
            r.refresh_cache = Some(true);
            r
        });
        corpus.push({
            let mut r = VisualizationRequest::new(Intent::Architecture, "Auth flow");
            r.max_nodes = Some(10);
            r
        });
        corpus.push({
            let mut r = VisualizationRequest::new(Intent::Architecture, "Auth flow");
            r.targets = Some(vec!["src".to_string()]);
            r
        });

        let hashes: Vec<String> = corpus
            .iter()
            .map(|r| VisualizeCache::generate_hash(r).unwrap())
            .collect();

        for i in 0..hashes.len() {
            for j in (i + 1)..hashes.len() {
                assert_ne!(hashes[i], hashes[j], "corpus entries {} and {} collide", i, j);
            }
        }
    }

    #[test]
    fn test_canonical_form_sorts_nested_keys() {
        let value: Value =
            serde_json::from_str(r#"{"b":{"z":1,"a":[2,{"y":3,"x":4}]},"a":true}"#).unwrap();
        let mut out = String::new();
        write_canonical(&value, &mut out);
        assert_eq!(out, r#"{"a":true,"b":{"a":[2,{"x":4,"y":3}],"z":1}}"#);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let tmp = TempDir::new().unwrap();
        let cache = scratch_cache(&tmp);

        cache.set("abc123", "┌─┐\n│x│\n└─┘").await.unwrap();

        let entry = cache.get("abc123").await.unwrap();
        assert_eq!(entry.hash, "abc123");
        assert_eq!(entry.ascii_diagram, "┌─┐\n│x│\n└─┘");
        assert!(entry.timestamp > 0);
    }

    #[tokio::test]
    async fn test_get_unknown_hash_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        let cache = scratch_cache(&tmp);

        assert!(cache.get("deadbeef").await.is_none());
    }

    #[tokio::test]
    async fn test_get_corrupt_entry_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        let cache = scratch_cache(&tmp);

        cache.set("abc123", "diagram").await.unwrap();
        let path = cache.cache_dir().await.unwrap().join("abc123.json");
        tokio::fs::write(&path, "{truncated").await.unwrap();

        assert!(cache.get("abc123").await.is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites_existing_entry() {
        let tmp = TempDir::new().unwrap();
        let cache = scratch_cache(&tmp);

        cache.set("abc123", "first").await.unwrap();
        cache.set("abc123", "second").await.unwrap();

        let entry = cache.get("abc123").await.unwrap();
        assert_eq!(entry.ascii_diagram, "second");
    }
}
