//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod ai;
mod content;
mod output;
mod selection;

pub use ai::FileAiConfig;
pub use content::{FileContentConfig, FileHistoryConfig};
pub use output::FileOutputConfig;
pub use selection::FileSelectionConfig;

use prep_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text-generation provider settings
    pub ai: FileAiConfig,
    /// Question selection settings
    pub selection: FileSelectionConfig,
    /// Question bank / syllabus overrides
    pub content: FileContentConfig,
    /// Exam history store
    pub history: FileHistoryConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings are reported and
    /// the affected setting falls back to its default behavior.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.ai.validate());
        issues.extend(self.selection.validate());
        issues.extend(self.content.validate());
        issues.extend(self.history.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[ai]
model = "gemini-2.0-flash"
api_key_env = "MY_KEY"
timeout_secs = 10

[selection]
latency_ms = 0
default_count = 20

[content]
question_bank = "bank.json"

[history]
store = "history.json"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert_eq!(config.ai.api_key_env, "MY_KEY");
        assert_eq!(config.ai.timeout_secs, 10);
        assert_eq!(config.selection.latency_ms, 0);
        assert_eq!(config.selection.default_count, 20);
        assert_eq!(config.content.question_bank.as_deref(), Some("bank.json"));
        assert!(config.content.syllabus.is_none());
        assert_eq!(config.history.store.as_deref(), Some("history.json"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[selection]
default_count = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.selection.default_count, 5);
        // Defaults should apply
        assert_eq!(config.selection.latency_ms, 800);
        assert_eq!(config.ai.api_key_env, "GEMINI_API_KEY");
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_issues_from_all_sections() {
        let mut config = FileConfig::default();
        config.selection.default_count = 0;
        config.ai.model = "  ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
    }
}
