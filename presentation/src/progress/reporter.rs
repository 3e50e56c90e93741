//! Progress reporting for selection and analysis

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prep_application::ProgressNotifier;
use prep_domain::{NarrativeOutcome, SelectionTier};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a spinner while questions load or a summary is generated
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn finish(&self, message: String) {
        let taken = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pb) = taken {
            pb.finish_with_message(message);
        }
    }

    fn tier_message(count: usize, tier: SelectionTier) -> String {
        match tier {
            SelectionTier::TopicMatch => format!("{} Loaded {} question(s)", "v".green(), count),
            SelectionTier::SubjectWide => format!(
                "{} Loaded {} question(s) from the whole subject",
                "~".yellow(),
                count
            ),
            SelectionTier::Synthetic => {
                format!("{} Generated {} placeholder question(s)", "~".yellow(), count)
            }
        }
    }

    fn analysis_message(outcome: &NarrativeOutcome) -> String {
        if outcome.is_generated() {
            format!("{} Summary ready", "v".green())
        } else {
            format!("{} Using offline summary", "~".yellow())
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_selection_start(&self, subject: &str, topic: &str) {
        self.start(format!("Loading {} questions on {}...", subject, topic));
    }

    fn on_selection_complete(&self, count: usize, tier: SelectionTier) {
        self.finish(Self::tier_message(count, tier));
    }

    fn on_analysis_start(&self, exam_label: &str) {
        self.start(format!("Analysing your {} performance...", exam_label));
    }

    fn on_analysis_complete(&self, outcome: &NarrativeOutcome) {
        self.finish(Self::analysis_message(outcome));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_selection_start(&self, subject: &str, topic: &str) {
        eprintln!("{} Loading {} questions on {}", "->".cyan(), subject, topic);
    }

    fn on_selection_complete(&self, count: usize, tier: SelectionTier) {
        eprintln!("  {}", ProgressReporter::tier_message(count, tier));
    }

    fn on_analysis_start(&self, exam_label: &str) {
        eprintln!("{} Analysing {} performance", "->".cyan(), exam_label);
    }

    fn on_analysis_complete(&self, outcome: &NarrativeOutcome) {
        eprintln!("  {}", ProgressReporter::analysis_message(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_domain::FallbackReason;

    #[test]
    fn test_tier_messages() {
        assert!(ProgressReporter::tier_message(3, SelectionTier::TopicMatch).contains("3 question"));
        assert!(
            ProgressReporter::tier_message(5, SelectionTier::Synthetic).contains("placeholder")
        );
    }

    #[test]
    fn test_reporter_lifecycle_is_balanced() {
        let reporter = ProgressReporter::new();
        reporter.on_analysis_start("JAMB Mathematics");
        reporter.on_analysis_start("JAMB Mathematics");
        reporter.on_analysis_complete(&NarrativeOutcome::fallback(FallbackReason::CallFailed));
        assert!(reporter.spinner.lock().unwrap().is_none());
        // Completing with nothing in flight is a no-op
        reporter.on_selection_complete(0, SelectionTier::TopicMatch);
    }
}
