//! Content and history locations (`[content]` and `[history]` sections)

use prep_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw `[content]` configuration. Unset paths use the built-in data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentConfig {
    /// JSON question bank
    pub question_bank: Option<String>,
    /// TOML syllabus
    pub syllabus: Option<String>,
}

impl FileContentConfig {
    pub fn question_bank_path(&self) -> Option<PathBuf> {
        self.question_bank.as_deref().map(PathBuf::from)
    }

    pub fn syllabus_path(&self) -> Option<PathBuf> {
        self.syllabus.as_deref().map(PathBuf::from)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        [
            ("content.question_bank", &self.question_bank),
            ("content.syllabus", &self.syllabus),
        ]
        .into_iter()
        .filter_map(|(field, path)| missing_file(field, path.as_deref()?))
        .collect()
    }
}

/// Raw `[history]` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// JSON exam history store
    pub store: Option<String>,
}

impl FileHistoryConfig {
    pub fn store_path(&self) -> Option<PathBuf> {
        self.store.as_deref().map(PathBuf::from)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        self.store
            .as_deref()
            .and_then(|path| missing_file("history.store", path))
            .into_iter()
            .collect()
    }
}

fn missing_file(field: &str, path: &str) -> Option<ConfigIssue> {
    if Path::new(path).exists() {
        return None;
    }
    Some(ConfigIssue::warning(
        ConfigIssueCode::MissingFile {
            field: field.to_string(),
            path: path.to_string(),
        },
        format!("{}: file '{}' does not exist", field, path),
    ))
}
