//! Error type for page downloads

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while filling or reading the page cache
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed before a response arrived, or the body could not be read
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Page name cannot be used as a file stem inside the cache directory
    #[error("invalid page name {name:?}: must be a plain file stem")]
    InvalidName { name: String },

    /// Reading or writing a cache file failed
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
