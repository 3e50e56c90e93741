//! Turns the raw answers of a completed attempt into an [`ExamResult`].

use super::result::{ExamResult, TopicBreakdown, rank_weak_areas};
use crate::core::error::DomainError;
use crate::core::exam_type::{ExamMode, ExamType};
use crate::question::entities::Question;
use serde::{Deserialize, Serialize};

/// One question of an attempt together with the student's choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    pub question_id: String,
    pub topic: String,
    pub correct_option_id: String,
    /// `None` when the question was skipped
    pub selected_option_id: Option<String>,
}

impl AnsweredQuestion {
    /// Record `selected` as the answer to `question`, keyed by its bank topic.
    pub fn from_question(question: &Question, selected: Option<&str>) -> Self {
        Self {
            question_id: question.id.clone(),
            topic: question.topic.clone(),
            correct_option_id: question.correct_option_id.clone(),
            selected_option_id: selected.map(str::to_string),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.selected_option_id.as_deref() == Some(self.correct_option_id.as_str())
    }
}

/// A completed attempt awaiting scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAttempt {
    pub id: String,
    pub exam_type: ExamType,
    pub mode: ExamMode,
    pub subject: Option<String>,
    pub time_spent_seconds: u64,
    pub answers: Vec<AnsweredQuestion>,
}

/// Computes accuracy, topic breakdown and weak areas.
pub struct PerformanceAnalyzer;

impl PerformanceAnalyzer {
    /// Score an attempt.
    ///
    /// Skipped questions count as incorrect. The topic breakdown keeps the
    /// order in which topics first appear in the attempt.
    pub fn analyze(attempt: &ExamAttempt) -> Result<ExamResult, DomainError> {
        if attempt.answers.is_empty() {
            return Err(DomainError::EmptyAttempt(attempt.id.clone()));
        }

        let mut breakdown: Vec<TopicBreakdown> = Vec::new();
        let mut correct = 0u32;

        for answer in &attempt.answers {
            let hit = answer.is_correct();
            if hit {
                correct += 1;
            }

            match breakdown.iter_mut().find(|b| b.topic == answer.topic) {
                Some(entry) => {
                    entry.total += 1;
                    entry.correct += u32::from(hit);
                }
                None => breakdown.push(TopicBreakdown::new(
                    answer.topic.clone(),
                    u32::from(hit),
                    1,
                )),
            }
        }

        let total = attempt.answers.len() as u32;
        let accuracy = Self::accuracy(correct, total);

        Ok(ExamResult {
            id: attempt.id.clone(),
            exam_type: attempt.exam_type.clone(),
            mode: attempt.mode,
            subject: attempt.subject.clone(),
            accuracy,
            score: accuracy,
            total_questions: total,
            time_spent_seconds: attempt.time_spent_seconds,
            weak_areas: rank_weak_areas(&breakdown),
            topic_breakdown: breakdown,
        })
    }

    /// `100 × correct / total` clamped to `[0, 100]`
    pub fn accuracy(correct: u32, total: u32) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (100.0 * correct as f64 / total as f64).clamp(0.0, 100.0)
    }
}
