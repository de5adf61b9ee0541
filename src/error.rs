// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Structural failures while reading a page. Fatal to the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExtractError {
    #[error("no table follows header \"{header}\"")]
    NoTable { header: String },

    #[error("no level number in header \"{header}\"")]
    NoLevel { header: String },

    #[error("level {level} out of range in header \"{header}\"")]
    LevelOutOfRange { header: String, level: f64 },

    #[error("no <{tag}> header containing \"{needle}\"")]
    HeaderNotFound { tag: &'static str, needle: String },

    #[error("character number cell not found")]
    NoNumber,

    #[error("unrecognized character number \"{text}\"")]
    BadNumber { text: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("while reading {page}: {source}")]
    Extract {
        page: String,
        #[source]
        source: ExtractError,
    },

    #[error("request to {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("invalid URL {url}")]
    Url { url: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn extract(page: impl Into<String>, source: ExtractError) -> Self {
        Error::Extract { page: page.into(), source }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
