//! Narrative summary outcome.
//!
//! Narrative generation never fails from the caller's point of view: it
//! either yields generated text or one of two fixed fallback texts, tagged
//! with the reason so callers can tell the paths apart without comparing
//! strings.

use serde::{Deserialize, Serialize};

/// Shown when no text-generation credential is configured
pub const NO_CREDENTIAL_FALLBACK: &str = "Great job completing this exam! Review your topic breakdown below to see where you shone and where a little more practice will pay off.";

/// Shown when the text-generation call fails
pub const CALL_FAILED_FALLBACK: &str = "Keep up the good work! Focus on your weak areas and take another practice session to push your score even higher.";

/// Why a fallback text was used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No credential configured; the call was never attempted
    MissingCredential,
    /// The call errored, timed out, or returned unusable output
    CallFailed,
}

impl FallbackReason {
    pub fn text(&self) -> &'static str {
        match self {
            FallbackReason::MissingCredential => NO_CREDENTIAL_FALLBACK,
            FallbackReason::CallFailed => CALL_FAILED_FALLBACK,
        }
    }
}

/// Result of narrative generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum NarrativeOutcome {
    Generated { text: String },
    Fallback { reason: FallbackReason, text: String },
}

impl NarrativeOutcome {
    pub fn generated(text: impl Into<String>) -> Self {
        NarrativeOutcome::Generated { text: text.into() }
    }

    pub fn fallback(reason: FallbackReason) -> Self {
        NarrativeOutcome::Fallback {
            reason,
            text: reason.text().to_string(),
        }
    }

    /// Displayable text, never empty
    pub fn text(&self) -> &str {
        match self {
            NarrativeOutcome::Generated { text } | NarrativeOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            NarrativeOutcome::Generated { .. } => None,
            NarrativeOutcome::Fallback { reason, .. } => Some(*reason),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, NarrativeOutcome::Generated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_texts_are_distinct_and_non_empty() {
        assert_ne!(NO_CREDENTIAL_FALLBACK, CALL_FAILED_FALLBACK);
        assert!(!NO_CREDENTIAL_FALLBACK.is_empty());
        assert!(!CALL_FAILED_FALLBACK.is_empty());
    }

    #[test]
    fn test_fallback_outcome() {
        let outcome = NarrativeOutcome::fallback(FallbackReason::CallFailed);
        assert_eq!(outcome.text(), CALL_FAILED_FALLBACK);
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::CallFailed));
        assert!(!outcome.is_generated());
    }

    #[test]
    fn test_generated_outcome_serializes_with_source_tag() {
        let outcome = NarrativeOutcome::generated("Well done.");
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["source"], "generated");
        assert_eq!(value["text"], "Well done.");
        assert!(outcome.fallback_reason().is_none());
    }
}
