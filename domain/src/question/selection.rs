//! Question selection tiers

use serde::{Deserialize, Serialize};

/// Which step of the selection cascade supplied a question set.
///
/// Tiers are tried in order; a later tier is only consulted when every
/// earlier one came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    /// Bank topic contains the requested topic
    TopicMatch,
    /// Any question of the subject
    SubjectWide,
    /// Synthetic placeholders; the subject has no content
    Synthetic,
}

impl SelectionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionTier::TopicMatch => "topic match",
            SelectionTier::SubjectWide => "subject-wide",
            SelectionTier::Synthetic => "synthetic",
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, SelectionTier::TopicMatch)
    }
}

impl std::fmt::Display for SelectionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
