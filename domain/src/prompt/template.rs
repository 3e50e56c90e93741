//! Prompt template for the performance narrative

use crate::performance::result::ExamResult;

/// Rounded scores below this get an explicit practice-mode recommendation
pub const PRACTICE_MODE_THRESHOLD: i64 = 50;

/// Builds the prompt sent to the text generator for an exam summary.
///
/// The reply is always asked for in three sentences: a comment on the score,
/// the weak areas (plus a practice-mode recommendation for low scores), and a
/// motivating close. Any generator behind the gateway gets the same structure.
pub struct AnalysisPromptTemplate;

impl AnalysisPromptTemplate {
    /// Comma-joined weak areas, or the explicit "None detected." sentence
    pub fn weak_areas_line(result: &ExamResult) -> String {
        if result.weak_areas.is_empty() {
            "None detected.".to_string()
        } else {
            result.weak_areas.join(", ")
        }
    }

    pub fn analysis_prompt(result: &ExamResult) -> String {
        let score = result.rounded_score();

        let mut prompt = format!(
            r#"You are an encouraging exam coach reviewing a student's {} exam ({} mode).

Score: {}%
Weak areas: {}

Write exactly three sentences:
1. Comment on the score.
2. Name the specific weak areas the student should focus on."#,
            result.exam_label(),
            result.mode,
            score,
            Self::weak_areas_line(result),
        );

        if score < PRACTICE_MODE_THRESHOLD {
            prompt.push_str(
                " Because the score is below 50, explicitly recommend using Practice Mode before attempting timed exams.",
            );
        }

        prompt.push_str(
            r#"
3. Close with one motivating line.

Reply with the three sentences only, without headings, lists or markdown."#,
        );

        prompt
    }
}
