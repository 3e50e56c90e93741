//! Text-generation provider configuration from TOML (`[ai]` section)

use prep_application::NarrativeParams;
use prep_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw `[ai]` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAiConfig {
    /// Environment variable holding the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the generateContent API.
    pub base_url: String,
    /// Model used for performance summaries.
    pub model: String,
    /// Request timeout in seconds; 0 disables the timeout.
    pub timeout_secs: u64,
}

impl Default for FileAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileAiConfig {
    /// Resolve the API key: explicit value first, then the named env var.
    ///
    /// Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn resolve_api_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        fn non_blank(key: &str) -> Option<String> {
            let key = key.trim();
            (!key.is_empty()).then(|| key.to_string())
        }

        self.api_key
            .as_deref()
            .and_then(non_blank)
            .or_else(|| lookup(&self.api_key_env).as_deref().and_then(non_blank))
    }

    pub fn to_narrative_params(&self) -> NarrativeParams {
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        NarrativeParams::default().with_timeout(timeout)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [("ai.model", &self.model), ("ai.base_url", &self.base_url)] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: must not be empty", field),
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let config = FileAiConfig {
            api_key: Some("direct".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("direct"));
    }

    #[test]
    fn test_key_from_named_env_var() {
        let config = FileAiConfig::default();
        let key = config.resolve_api_key_with(|name| {
            (name == "GEMINI_API_KEY").then(|| "from-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = FileAiConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key_with(|_| None).is_none());
        assert!(FileAiConfig::default().resolve_api_key_with(|_| None).is_none());
    }

    #[test]
    fn test_blank_key_falls_back_to_env_var() {
        let config = FileAiConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|name| {
            (name == "GEMINI_API_KEY").then(|| " env-secret ".to_string())
        });
        assert_eq!(key.as_deref(), Some("env-secret"));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = FileAiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.to_narrative_params().timeout.is_none());
        assert_eq!(
            FileAiConfig::default().to_narrative_params().timeout,
            Some(Duration::from_secs(30))
        );
    }
}
