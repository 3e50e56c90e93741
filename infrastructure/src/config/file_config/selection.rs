//! Question selection configuration from TOML (`[selection]` section)

use prep_application::SelectionParams;
use prep_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw `[selection]` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionConfig {
    /// Simulated retrieval delay in milliseconds
    pub latency_ms: u64,
    /// Questions served when the caller gives no count
    pub default_count: usize,
}

impl Default for FileSelectionConfig {
    fn default() -> Self {
        let params = SelectionParams::default();
        Self {
            latency_ms: params.latency.as_millis() as u64,
            default_count: params.default_count,
        }
    }
}

impl FileSelectionConfig {
    pub fn to_selection_params(&self) -> SelectionParams {
        SelectionParams::default()
            .with_latency(Duration::from_millis(self.latency_ms))
            .with_default_count(self.default_count.max(1))
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.default_count == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "selection.default_count".to_string(),
                },
                "selection.default_count: must be at least 1",
            ));
        }
        if self.latency_ms > 10_000 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "selection.latency_ms".to_string(),
                },
                format!(
                    "selection.latency_ms: {}ms is unusually long for a simulated delay",
                    self.latency_ms
                ),
            ));
        }
        issues
    }
}
