//! Use case parameters.
//!
//! These are application-layer concerns, not domain policy; the
//! infrastructure config loader fills them from the `[selection]` and `[ai]`
//! sections.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Question selection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionParams {
    /// Delay awaited before a selection resolves.
    pub latency: Duration,
    /// Question count used when the caller does not ask for one.
    pub default_count: usize,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(800),
            default_count: 10,
        }
    }
}

impl SelectionParams {
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    /// No delay, for tests and scripted runs
    pub fn immediate() -> Self {
        Self::default().with_latency(Duration::ZERO)
    }
}

/// Narrative generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeParams {
    /// Upper bound on the text-generation call; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for NarrativeParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl NarrativeParams {
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let selection = SelectionParams::default();
        assert_eq!(selection.latency, Duration::from_millis(800));
        assert_eq!(selection.default_count, 10);
        assert_eq!(
            NarrativeParams::default().timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_builder() {
        let params = SelectionParams::immediate().with_default_count(5);
        assert_eq!(params.latency, Duration::ZERO);
        assert_eq!(params.default_count, 5);
        assert!(NarrativeParams::default().with_timeout(None).timeout.is_none());
    }
}
