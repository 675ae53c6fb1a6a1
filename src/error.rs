use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GtfsGetError>;

#[derive(Error, Debug)]
pub enum GtfsGetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Server returned status {code} for {url}")]
    HttpStatus { url: String, code: u16 },

    #[error("Invalid feed archive: {message}")]
    ArchiveFormat { message: String },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,
}

impl GtfsGetError {
    pub fn archive_format<S: Into<String>>(message: S) -> Self {
        GtfsGetError::ArchiveFormat {
            message: message.into(),
        }
    }
}
