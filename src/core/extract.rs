use crate::error::{GtfsGetError, Result};
use crate::utils::fs as fs_utils;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Outcome of unpacking one archive into a directory.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Relative paths of the files written, in archive order.
    pub files: Vec<PathBuf>,
    /// Entries whose names would escape the destination; never extracted.
    pub skipped: usize,
}

/// Extract every entry of a ZIP archive into `destination`.
///
/// Existing files with the same relative path are overwritten. Entries whose
/// names resolve outside `destination` (absolute paths or `..` segments) are
/// skipped and counted. Entries already written stay on disk if a later entry
/// fails.
pub fn extract_zip<R: Read + Seek>(reader: R, destination: &Path) -> Result<Extraction> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| GtfsGetError::archive_format(e.to_string()))?;

    fs_utils::ensure_dir_exists(destination)?;

    let mut extraction = Extraction::default();

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| GtfsGetError::archive_format(e.to_string()))?;
        let relative = match file.enclosed_name() {
            Some(path) => path,
            None => {
                extraction.skipped += 1;
                continue;
            }
        };
        let outpath = destination.join(&relative);

        if file.name().ends_with('/') {
            fs_utils::ensure_dir_exists(&outpath)?;
        } else {
            if let Some(p) = outpath.parent() {
                if !p.exists() {
                    std::fs::create_dir_all(p)?;
                }
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut file, &mut outfile)?;
            extraction.files.push(relative);
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = file.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            if name.ends_with('/') {
                writer.add_directory(name.trim_end_matches('/'), options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_writes_all_entries() {
        let zip = build_zip(&[("routes.txt", b"A,B,C"), ("stops.txt", b"1,2,3")]);
        let dir = tempfile::tempdir().unwrap();

        let extraction = extract_zip(Cursor::new(zip), dir.path()).unwrap();

        assert_eq!(extraction.files.len(), 2);
        assert_eq!(extraction.skipped, 0);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("routes.txt")).unwrap(),
            "A,B,C"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("stops.txt")).unwrap(),
            "1,2,3"
        );
    }

    #[test]
    fn test_extract_creates_nested_directories() {
        let zip = build_zip(&[("feed/", b""), ("feed/calendar.txt", b"weekdays")]);
        let dir = tempfile::tempdir().unwrap();

        let extraction = extract_zip(Cursor::new(zip), dir.path()).unwrap();

        assert_eq!(extraction.files, vec![PathBuf::from("feed/calendar.txt")]);
        assert!(dir.path().join("feed").is_dir());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("feed/calendar.txt")).unwrap(),
            "weekdays"
        );
    }

    #[test]
    fn test_extract_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("routes.txt"), "stale").unwrap();

        let zip = build_zip(&[("routes.txt", b"A,B,C")]);
        extract_zip(Cursor::new(zip), dir.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("routes.txt")).unwrap(),
            "A,B,C"
        );
    }

    #[test]
    fn test_extract_skips_traversal_entries() {
        let zip = build_zip(&[("../escape.txt", b"nope"), ("routes.txt", b"A,B,C")]);
        let dir = tempfile::tempdir().unwrap();

        let extraction = extract_zip(Cursor::new(zip), dir.path()).unwrap();

        assert_eq!(extraction.skipped, 1);
        assert_eq!(extraction.files, vec![PathBuf::from("routes.txt")]);
        assert!(!dir.path().parent().unwrap().join("escape.txt").exists());
    }

    #[test]
    fn test_extract_rejects_non_zip_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_zip(Cursor::new(b"<html>not found</html>".to_vec()), dir.path());

        assert!(matches!(
            result,
            Err(crate::error::GtfsGetError::ArchiveFormat { .. })
        ));
    }
}
