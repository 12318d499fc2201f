// Docs Errors

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocsError>;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {}", messages.join("; "))]
    Parse { path: PathBuf, messages: Vec<String> },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config<E: std::fmt::Display>(e: E) -> Self {
        Self::Config(e.to_string())
    }
}
