//! Synthetic placeholder questions.
//!
//! Served when a subject has no authored content yet, so a practice session
//! for an unpopulated subject still gets the number of questions it asked for.

use super::entities::{AnswerOption, Difficulty, GeneratedQuestion, Question};
use crate::core::exam_type::ExamType;
use crate::util::slugify;

/// Option id every placeholder marks as correct
pub const PLACEHOLDER_CORRECT_OPTION: &str = "a";

/// Explanation attached to every placeholder question
pub const PLACEHOLDER_EXPLANATION: &str =
    "Detailed explanation for this question is pending. Authored content for this topic is coming soon.";

/// Build `count` placeholder questions for `subject`/`topic`.
///
/// `batch` must be unique per call (the caller derives it from a timestamp
/// and a sequence number); ids are `placeholder-<subject>-<batch>-<index>`.
pub fn placeholder_questions(
    subject: &str,
    topic: &str,
    exam_type: &ExamType,
    count: usize,
    batch: &str,
) -> Vec<GeneratedQuestion> {
    let subject_slug = slugify(subject);
    (0..count)
        .map(|index| {
            let question = Question {
                id: format!("placeholder-{}-{}-{}", subject_slug, batch, index),
                exam_type: exam_type.clone(),
                subject: subject.to_string(),
                topic: topic.to_string(),
                text: format!(
                    "Practice question {} for {} ({}): content for this topic is being prepared.",
                    index + 1,
                    topic,
                    subject
                ),
                options: vec![
                    AnswerOption::new("a", "Option A"),
                    AnswerOption::new("b", "Option B"),
                    AnswerOption::new("c", "Option C"),
                    AnswerOption::new("d", "Option D"),
                ],
                correct_option_id: PLACEHOLDER_CORRECT_OPTION.to_string(),
                explanation: PLACEHOLDER_EXPLANATION.to_string(),
                difficulty: Difficulty::Medium,
            };
            GeneratedQuestion::new(question, topic)
        })
        .collect()
}

/// Whether a question id was produced by [`placeholder_questions`].
pub fn is_placeholder_id(id: &str) -> bool {
    id.starts_with("placeholder-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_placeholder_structure() {
        let questions = placeholder_questions("Literature", "Poetry", &ExamType::Waec, 4, "1700");
        assert_eq!(questions.len(), 4);
        for q in &questions {
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.correct_option_id, "a");
            assert_eq!(q.difficulty, Difficulty::Medium);
            assert_eq!(q.syllabus_topic, "Poetry");
            assert!(q.explanation.contains("pending"));
            assert!(q.validate().is_ok());
            assert!(is_placeholder_id(q.id()));
        }
        let labels: Vec<_> = questions[0].options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_placeholder_ids_unique_within_batch() {
        let questions = placeholder_questions("Literature", "Poetry", &ExamType::Jamb, 5, "b1");
        let ids: HashSet<&str> = questions.iter().map(|q| q.id()).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(questions[0].id(), "placeholder-literature-b1-0");
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(placeholder_questions("Art", "Colour", &ExamType::Jamb, 0, "b").is_empty());
    }
}
