use crate::error::{GtfsGetError, Result};
use std::path::{Path, PathBuf};

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => GtfsGetError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => GtfsGetError::from(e),
        })?;
    }
    Ok(())
}

/// Names and sizes of the plain files directly under `dir`, sorted by name.
pub fn list_files(dir: &Path) -> Result<Vec<(PathBuf, u64)>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            files.push((PathBuf::from(entry.file_name()), metadata.len()));
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_exists_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c");

        ensure_dir_exists(&target).unwrap();
        assert!(target.is_dir());

        // Second call on an existing directory is a no-op
        ensure_dir_exists(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_list_files_sorted_without_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stops.txt"), "1,2,3").unwrap();
        std::fs::write(dir.path().join("routes.txt"), "A,B,C").unwrap();
        std::fs::create_dir(dir.path().join("shapes")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                (PathBuf::from("routes.txt"), 5),
                (PathBuf::from("stops.txt"), 5),
            ]
        );
    }
}
