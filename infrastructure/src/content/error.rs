//! Error types for the content loaders

use prep_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading question banks and syllabi
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question bank: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed syllabus: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Question id {0} uses the reserved placeholder prefix")]
    ReservedId(String),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
