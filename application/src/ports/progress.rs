//! Progress notification port
//!
//! Selection and narrative generation both suspend (simulated latency,
//! network call); callers show a loading state through this port.

use prep_domain::{NarrativeOutcome, SelectionTier};

/// Callback for progress updates
///
/// Implementations live in the presentation layer (spinners, plain text).
pub trait ProgressNotifier: Send + Sync {
    /// Called before questions are selected
    fn on_selection_start(&self, subject: &str, topic: &str);

    /// Called once a selection resolved
    fn on_selection_complete(&self, count: usize, tier: SelectionTier);

    /// Called before the narrative summary is requested
    fn on_analysis_start(&self, exam_label: &str);

    /// Called once the narrative summary resolved
    fn on_analysis_complete(&self, outcome: &NarrativeOutcome);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_selection_start(&self, _subject: &str, _topic: &str) {}
    fn on_selection_complete(&self, _count: usize, _tier: SelectionTier) {}
    fn on_analysis_start(&self, _exam_label: &str) {}
    fn on_analysis_complete(&self, _outcome: &NarrativeOutcome) {}
}
