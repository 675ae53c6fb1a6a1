use crate::core::extract;
use crate::error::{GtfsGetError, Result};
use crate::utils::fs as fs_utils;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const USER_AGENT: &str = concat!("gtfsget/", env!("CARGO_PKG_VERSION"));

/// Summary of one completed fetch.
#[derive(Debug)]
pub struct FetchReport {
    pub target_dir: PathBuf,
    pub bytes_downloaded: usize,
    /// Relative paths of the extracted files.
    pub files: Vec<PathBuf>,
    /// Archive entries skipped because their names escape the target dir.
    pub skipped_entries: usize,
}

pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Download the feed archive at `url` and unpack it into `target_dir`.
    ///
    /// The target directory is created first if missing. The whole response
    /// body is buffered in memory before extraction begins; nothing is
    /// extracted unless the server answers 200. A non-200 status is returned
    /// as `HttpStatus` with the observed code, a body that is not a valid
    /// ZIP archive as `ArchiveFormat`.
    pub fn fetch_and_extract(&self, url: &str, target_dir: &Path) -> Result<FetchReport> {
        fs_utils::ensure_dir_exists(target_dir)?;

        println!("Downloading feed from {url}...");

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .map_err(|e| GtfsGetError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(GtfsGetError::HttpStatus {
                url: url.to_string(),
                code: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| GtfsGetError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let extraction = extract::extract_zip(Cursor::new(&body[..]), target_dir)?;

        Ok(FetchReport {
            target_dir: target_dir.to_path_buf(),
            bytes_downloaded: body.len(),
            files: extraction.files,
            skipped_entries: extraction.skipped,
        })
    }
}
