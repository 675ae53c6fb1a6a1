use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the manifest kept inside the target directory.
pub const MANIFEST_FILE: &str = ".gtfsget.json";

/// Record of the last successful fetch into a target directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedManifest {
    pub source_url: String,
    pub fetched_at: DateTime<Utc>,
    pub files: Vec<PathBuf>,
}

impl FeedManifest {
    pub fn new(source_url: &str, files: Vec<PathBuf>) -> Self {
        Self {
            source_url: source_url.to_string(),
            fetched_at: Utc::now(),
            files,
        }
    }

    /// Load the manifest from a target directory, if one has been written.
    pub fn load(target_dir: &Path) -> Result<Option<Self>> {
        let path = target_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let manifest: FeedManifest = serde_json::from_str(&content)?;
        Ok(Some(manifest))
    }

    pub fn save(&self, target_dir: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(target_dir.join(MANIFEST_FILE), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = FeedManifest::new(
            "http://localhost/feed.zip",
            vec![PathBuf::from("routes.txt"), PathBuf::from("stops.txt")],
        );
        manifest.save(dir.path()).unwrap();

        let loaded = FeedManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.source_url, manifest.source_url);
        assert_eq!(loaded.fetched_at, manifest.fetched_at);
        assert_eq!(loaded.files, manifest.files);
    }

    #[test]
    fn test_missing_manifest_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FeedManifest::load(dir.path()).unwrap().is_none());
    }
}
