//! Console output formatter for exam-prep results

use colored::{ColoredString, Colorize};
use prep_application::{Dashboard, QuestionSelection, ResultReview};
use prep_domain::{
    CALL_FAILED_FALLBACK, ExamResult, FallbackReason, GeneratedQuestion, NarrativeOutcome,
    PerformanceBand, SyllabusIndex,
};
use serde::Serialize;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Band label in its display color
    pub fn band_label(band: PerformanceBand) -> ColoredString {
        match band {
            PerformanceBand::Excellent => band.label().green().bold(),
            PerformanceBand::Average => band.label().yellow().bold(),
            PerformanceBand::NeedsWork => band.label().red().bold(),
        }
    }

    /// Whole percent, floored so the figure never crosses a band threshold
    fn percent(value: f64, band: PerformanceBand) -> ColoredString {
        let text = format!("{:.0}%", value.floor());
        match band {
            PerformanceBand::Excellent => text.green(),
            PerformanceBand::Average => text.yellow(),
            PerformanceBand::NeedsWork => text.red(),
        }
    }

    /// Syllabus listing, one subject per block
    pub fn format_topics(
        index: &SyllabusIndex,
        subject: Option<&str>,
        bank_subjects: &[String],
    ) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Syllabus"));
        output.push('\n');

        let subjects: Vec<&str> = match subject {
            Some(wanted) => index
                .subjects()
                .filter(|s| s.eq_ignore_ascii_case(wanted))
                .collect(),
            None => index.subjects().collect(),
        };

        if subjects.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                format!("No syllabus entry for '{}'", subject.unwrap_or_default()).yellow()
            ));
            return output;
        }

        for name in subjects {
            let has_questions = bank_subjects.iter().any(|s| s.eq_ignore_ascii_case(name));
            let marker = if has_questions {
                String::new()
            } else {
                format!(" {}", "(no questions yet)".dimmed())
            };
            output.push_str(&Self::section_header(&format!("{}{}", name, marker)));

            for topic in index.topics(name) {
                output.push_str(&format!("  * {}\n", topic.name));
                if !topic.subtopics.is_empty() {
                    output.push_str(&format!("      {}\n", topic.subtopics.join(", ").dimmed()));
                }
            }
        }

        output
    }

    /// A question selection, numbered in serving order
    pub fn format_selection(selection: &QuestionSelection, subject: &str, reveal: bool) -> String {
        let mut output = String::new();
        let topic = selection
            .questions
            .first()
            .map(|q| q.syllabus_topic.as_str())
            .unwrap_or_default();

        output.push_str(&Self::header(&format!("{} - {}", subject, topic)));
        output.push('\n');

        if selection.tier.is_fallback() {
            output.push_str(&format!(
                "{} {}\n",
                "Note:".yellow().bold(),
                Self::tier_note(selection)
            ));
        }

        if selection.is_empty() {
            output.push_str(&format!("\n{}\n", "No questions requested.".dimmed()));
        }

        for (i, question) in selection.questions.iter().enumerate() {
            output.push_str(&Self::format_question(i + 1, question, reveal));
        }

        output.push_str(&Self::footer());
        output
    }

    fn tier_note(selection: &QuestionSelection) -> String {
        use prep_domain::SelectionTier;
        match selection.tier {
            SelectionTier::TopicMatch => String::new(),
            SelectionTier::SubjectWide => {
                "no questions match this topic yet; showing questions from across the subject."
                    .to_string()
            }
            SelectionTier::Synthetic => {
                "this subject has no questions yet; showing placeholders.".to_string()
            }
        }
    }

    fn format_question(number: usize, question: &GeneratedQuestion, reveal: bool) -> String {
        let mut output = format!(
            "\n{} {} {}\n",
            format!("{}.", number).cyan().bold(),
            question.text,
            format!("[{}, {}]", question.topic, question.difficulty).dimmed()
        );

        for option in &question.options {
            let line = format!("   {}) {}", option.id, option.text);
            if reveal && option.id == question.correct_option_id {
                output.push_str(&format!("{}\n", line.green()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        if reveal && !question.explanation.is_empty() {
            output.push_str(&format!(
                "   {} {}\n",
                "Why:".dimmed(),
                question.explanation.dimmed()
            ));
        }

        output
    }

    /// A scored result with its narrative summary
    pub fn format_result(result: &ExamResult, narrative: &NarrativeOutcome) -> String {
        let mut output = String::new();
        let band = result.band();

        output.push_str(&Self::header(&format!("{} Results", result.exam_label())));
        output.push('\n');

        output.push_str(&format!(
            "{} {}  {}\n",
            "Score:".cyan().bold(),
            Self::percent(result.accuracy, band),
            Self::band_label(band)
        ));
        output.push_str(&format!(
            "{} {}/{}  {} {}  {} {}\n",
            "Correct:".cyan().bold(),
            result.correct_answers(),
            result.total_questions,
            "Mode:".cyan().bold(),
            result.mode,
            "Time:".cyan().bold(),
            Self::format_duration(result.time_spent_seconds)
        ));

        if !result.topic_breakdown.is_empty() {
            output.push_str(&Self::section_header("Topic Breakdown"));
            for topic in &result.topic_breakdown {
                let topic_band = topic.band();
                output.push_str(&format!(
                    "  {:<28} {:>3}/{:<3} {:>5}  {}\n",
                    topic.topic,
                    topic.correct,
                    topic.total,
                    Self::percent(topic.percentage(), topic_band),
                    topic_band.proficiency().dimmed()
                ));
            }
        }

        output.push_str(&Self::section_header("Weak Areas"));
        if result.weak_areas.is_empty() {
            output.push_str(&format!("  {}\n", "None detected.".green()));
        } else {
            for area in &result.weak_areas {
                output.push_str(&format!("  * {}\n", area.red()));
            }
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!("{}\n", Self::narrative_text(narrative)));
        if let Some(reason) = narrative.fallback_reason() {
            let note = match reason {
                FallbackReason::MissingCredential => "AI summary unavailable: no API key configured",
                FallbackReason::CallFailed => "AI summary unavailable: the request failed",
            };
            output.push_str(&format!("{}\n", format!("({})", note).dimmed()));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Narrative text, falling back if it is somehow blank
    pub fn narrative_text(narrative: &NarrativeOutcome) -> &str {
        let text = narrative.text().trim();
        if text.is_empty() {
            CALL_FAILED_FALLBACK
        } else {
            text
        }
    }

    pub fn format_review(review: &ResultReview) -> String {
        Self::format_result(&review.result, &review.narrative)
    }

    /// Recent activity and its aggregates
    pub fn format_dashboard(dashboard: &Dashboard) -> String {
        let mut output = String::new();
        let summary = &dashboard.summary;

        output.push_str(&Self::header(&format!("History: {}", dashboard.student_id)));
        output.push('\n');

        if dashboard.history.is_empty() {
            output.push_str(&format!("\n{}\n", "No exams taken yet.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        output.push_str(&format!(
            "{} {}\n",
            "Exams taken:".cyan().bold(),
            summary.exams_taken
        ));
        if let Some(average) = summary.average_accuracy {
            output.push_str(&format!(
                "{} {}\n",
                "Average:".cyan().bold(),
                Self::percent(average, PerformanceBand::from_accuracy(average))
            ));
        }
        if let Some(best) = summary.best_accuracy {
            output.push_str(&format!(
                "{} {}\n",
                "Best:".cyan().bold(),
                Self::percent(best, PerformanceBand::from_accuracy(best))
            ));
        }

        output.push_str(&Self::section_header("Recent Activity"));
        for item in &dashboard.history {
            let band = item.band();
            output.push_str(&format!(
                "  {}  {:<16} {:<9} {:>5}  {:<3} {}  {}\n",
                item.date.format("%Y-%m-%d"),
                item.id,
                item.exam_type.as_str(),
                Self::percent(item.accuracy, band),
                item.total,
                "questions".dimmed(),
                Self::band_label(band)
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// `754` → `"12m 34s"`
    pub fn format_duration(seconds: u64) -> String {
        match (seconds / 3600, (seconds % 3600) / 60, seconds % 60) {
            (0, 0, s) => format!("{}s", s),
            (0, m, s) => format!("{}m {}s", m, s),
            (h, m, _) => format!("{}h {}m", h, m),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use prep_domain::{
        DashboardSummary, ExamHistoryItem, ExamMode, ExamType, SelectionTier, TopicBreakdown,
        placeholder_questions,
    };

    fn result(accuracy: f64, weak_areas: Vec<&str>) -> ExamResult {
        ExamResult {
            id: "exam-7".to_string(),
            exam_type: ExamType::Waec,
            mode: ExamMode::Practice,
            subject: Some("Physics".to_string()),
            accuracy,
            score: accuracy,
            total_questions: 4,
            time_spent_seconds: 754,
            weak_areas: weak_areas.into_iter().map(String::from).collect(),
            topic_breakdown: vec![
                TopicBreakdown::new("Waves", 1, 2),
                TopicBreakdown::new("Mechanics", 0, 2),
            ],
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(ConsoleFormatter::format_duration(42), "42s");
        assert_eq!(ConsoleFormatter::format_duration(754), "12m 34s");
        assert_eq!(ConsoleFormatter::format_duration(3_900), "1h 5m");
    }

    #[test]
    fn test_result_shows_band_weak_areas_and_narrative() {
        let narrative = NarrativeOutcome::generated("Solid effort on waves.");
        let text = ConsoleFormatter::format_result(&result(25.0, vec!["Mechanics"]), &narrative);

        assert!(text.contains("WAEC Physics Results"));
        assert!(text.contains("25%"));
        assert!(text.contains("Needs Work"));
        assert!(text.contains("Mechanics"));
        assert!(text.contains("Solid effort on waves."));
        assert!(text.contains("12m 34s"));
        assert!(!text.contains("AI summary unavailable"));
    }

    #[test]
    fn test_percent_agrees_with_band() {
        let narrative = NarrativeOutcome::generated("Close to the top band.");
        let text = ConsoleFormatter::format_result(&result(69.5, vec![]), &narrative);
        assert!(text.contains("69%"));
        assert!(!text.contains("70%"));
        assert!(text.contains("Average"));
    }

    #[test]
    fn test_result_without_weak_areas() {
        let narrative = NarrativeOutcome::fallback(FallbackReason::MissingCredential);
        let text = ConsoleFormatter::format_result(&result(80.0, vec![]), &narrative);
        assert!(text.contains("None detected."));
        assert!(text.contains("Excellent"));
        assert!(text.contains("no API key configured"));
    }

    #[test]
    fn test_blank_narrative_is_replaced() {
        let narrative = NarrativeOutcome::generated("   ");
        assert_eq!(ConsoleFormatter::narrative_text(&narrative), CALL_FAILED_FALLBACK);
    }

    #[test]
    fn test_synthetic_selection_has_note() {
        let selection = QuestionSelection {
            questions: placeholder_questions("Literature", "Poetry", &ExamType::Jamb, 2, "1"),
            tier: SelectionTier::Synthetic,
        };
        let text = ConsoleFormatter::format_selection(&selection, "Literature", true);
        assert!(text.contains("placeholders"));
        assert!(text.contains("Literature - Poetry"));
        assert!(text.contains("Why:"));
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard {
            student_id: "ada".to_string(),
            history: vec![],
            summary: DashboardSummary::from_history(&[]),
        };
        assert!(ConsoleFormatter::format_dashboard(&dashboard).contains("No exams taken yet."));
    }

    #[test]
    fn test_dashboard_lists_items() {
        let item = ExamHistoryItem::from_result(
            &result(60.0, vec![]),
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        );
        let history = vec![item];
        let dashboard = Dashboard {
            student_id: "ada".to_string(),
            summary: DashboardSummary::from_history(&history),
            history,
        };
        let text = ConsoleFormatter::format_dashboard(&dashboard);
        assert!(text.contains("2026-03-01"));
        assert!(text.contains("exam-7"));
        assert!(text.contains("Average"));
    }

    #[test]
    fn test_json_output() {
        let json = ConsoleFormatter::format_json(&NarrativeOutcome::generated("Hi"));
        assert!(json.contains("\"source\": \"generated\""));
    }
}
