use std::path::PathBuf;
use thiserror::Error;

use crate::package::models::Region;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to read .docx: {0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("source directory not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("no source configured for {0}")]
    RegionNotConfigured(Region),
}
