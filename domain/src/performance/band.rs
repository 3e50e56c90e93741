//! Performance bands

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the strong band, in percent
pub const STRONG_THRESHOLD: f64 = 70.0;

/// Lower bound (inclusive) of the average band, in percent
pub const AVERAGE_THRESHOLD: f64 = 50.0;

/// Three-tier banding of an accuracy percentage.
///
/// Both scoring (weak-area detection) and rendering derive their thresholds
/// from [`PerformanceBand::from_accuracy`].
///
/// # Example
///
/// ```
/// use prep_domain::PerformanceBand;
///
/// assert_eq!(PerformanceBand::from_accuracy(70.0), PerformanceBand::Excellent);
/// assert_eq!(PerformanceBand::from_accuracy(69.9), PerformanceBand::Average);
/// assert_eq!(PerformanceBand::from_accuracy(49.9), PerformanceBand::NeedsWork);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// accuracy ≥ 70
    Excellent,
    /// 50 ≤ accuracy < 70
    Average,
    /// accuracy < 50
    NeedsWork,
}

impl PerformanceBand {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= STRONG_THRESHOLD {
            PerformanceBand::Excellent
        } else if accuracy >= AVERAGE_THRESHOLD {
            PerformanceBand::Average
        } else {
            PerformanceBand::NeedsWork
        }
    }

    /// Band of a `correct / total` ratio; a zero total counts as needs-work.
    pub fn from_ratio(correct: u32, total: u32) -> Self {
        if total == 0 {
            return PerformanceBand::NeedsWork;
        }
        Self::from_accuracy(100.0 * correct as f64 / total as f64)
    }

    /// Label shown to students
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "Excellent",
            PerformanceBand::Average => "Average",
            PerformanceBand::NeedsWork => "Needs Work",
        }
    }

    /// Proficiency wording used in topic breakdowns
    pub fn proficiency(&self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "strong",
            PerformanceBand::Average => "average",
            PerformanceBand::NeedsWork => "weak",
        }
    }

    /// Topics in this band are reported as weak areas
    pub fn is_weak(&self) -> bool {
        matches!(self, PerformanceBand::NeedsWork)
    }
}

impl std::fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
