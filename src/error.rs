//! Error types for loading posts and writing feeds

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Couldn't read from directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't read file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't generate RSS feed: {0}")]
    Rss(#[from] rss::Error),

    #[error("Couldn't generate RSS feed: {0}")]
    RssValidation(#[from] rss::validation::ValidationError),

    #[error("Couldn't generate Atom feed: {0}")]
    Atom(#[from] atom_syndication::Error),

    #[error("Couldn't create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Couldn't write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-file metadata problems. The offending post is skipped.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("file is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unterminated JSON front-matter")]
    UnterminatedJson,

    #[error("unrecognized date: {0:?}")]
    Date(String),
}
