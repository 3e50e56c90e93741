//! Exam result entities

use super::band::PerformanceBand;
use crate::core::error::DomainError;
use crate::core::exam_type::{ExamMode, ExamType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Allowed gap between a stored accuracy and the one its breakdown implies
pub const ACCURACY_TOLERANCE: f64 = 0.05;

/// Correct/total counts for one topic of an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicBreakdown {
    pub topic: String,
    pub correct: u32,
    pub total: u32,
}

impl TopicBreakdown {
    pub fn new(topic: impl Into<String>, correct: u32, total: u32) -> Self {
        Self {
            topic: topic.into(),
            correct,
            total,
        }
    }

    /// `correct / total`, 0 for an empty topic
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        self.ratio() * 100.0
    }

    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_ratio(self.correct, self.total)
    }
}

/// Topics of `breakdown` in the weak band, weakest ratio first.
///
/// Ties are ordered by topic name so the list is stable.
pub fn rank_weak_areas(breakdown: &[TopicBreakdown]) -> Vec<String> {
    let mut weak: Vec<&TopicBreakdown> = breakdown.iter().filter(|b| b.band().is_weak()).collect();
    weak.sort_by(|a, b| {
        a.ratio()
            .partial_cmp(&b.ratio())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.topic.cmp(&b.topic))
    });
    weak.into_iter().map(|b| b.topic.clone()).collect()
}

/// Scored outcome of one completed exam attempt (Entity).
///
/// Created once per attempt by the scoring pipeline. `score` uses the same
/// scale as `accuracy` today, but consumers must not assume the two are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub exam_type: ExamType,
    pub mode: ExamMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Percentage in `[0, 100]`
    pub accuracy: f64,
    pub score: f64,
    pub total_questions: u32,
    #[serde(default)]
    pub time_spent_seconds: u64,
    /// Weakest first
    #[serde(default)]
    pub weak_areas: Vec<String>,
    #[serde(default)]
    pub topic_breakdown: Vec<TopicBreakdown>,
}

impl ExamResult {
    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_accuracy(self.accuracy)
    }

    /// Score rounded to the nearest whole number, as shown to students
    pub fn rounded_score(&self) -> i64 {
        self.score.round() as i64
    }

    /// Number of correct answers according to the topic breakdown
    pub fn correct_answers(&self) -> u32 {
        self.topic_breakdown.iter().map(|b| b.correct).sum()
    }

    /// Label naming the exam, e.g. `"WAEC Mathematics"` or `"JAMB"`
    pub fn exam_label(&self) -> String {
        match &self.subject {
            Some(subject) => format!("{} {}", self.exam_type, subject),
            None => self.exam_type.to_string(),
        }
    }

    /// Check the result invariants:
    ///
    /// - `total_questions > 0`
    /// - `0 ≤ accuracy ≤ 100`
    /// - every topic has `total > 0` and `correct ≤ total`
    /// - topic totals add up to `total_questions`
    /// - `accuracy` matches `100 × Σcorrect / total_questions`
    /// - weak areas name breakdown topics, weakest ratio first
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total_questions == 0 {
            return Err(DomainError::invalid_result(&self.id, "total questions is zero"));
        }

        if !self.accuracy.is_finite() || !(0.0..=100.0).contains(&self.accuracy) {
            return Err(DomainError::invalid_result(
                &self.id,
                format!("accuracy {} is outside [0, 100]", self.accuracy),
            ));
        }

        for topic in &self.topic_breakdown {
            if topic.total == 0 {
                return Err(DomainError::invalid_result(
                    &self.id,
                    format!("topic '{}' has no questions", topic.topic),
                ));
            }
            if topic.correct > topic.total {
                return Err(DomainError::invalid_result(
                    &self.id,
                    format!(
                        "topic '{}' has {} correct out of {}",
                        topic.topic, topic.correct, topic.total
                    ),
                ));
            }
        }

        let partitioned: u32 = self.topic_breakdown.iter().map(|b| b.total).sum();
        if partitioned != self.total_questions {
            return Err(DomainError::invalid_result(
                &self.id,
                format!(
                    "topic totals add up to {} but the exam has {} questions",
                    partitioned, self.total_questions
                ),
            ));
        }

        let expected = 100.0 * self.correct_answers() as f64 / self.total_questions as f64;
        if (self.accuracy - expected).abs() > ACCURACY_TOLERANCE {
            return Err(DomainError::invalid_result(
                &self.id,
                format!(
                    "accuracy {} does not match the breakdown ({:.1})",
                    self.accuracy, expected
                ),
            ));
        }

        self.validate_weak_areas()
    }

    fn validate_weak_areas(&self) -> Result<(), DomainError> {
        let mut previous: Option<(&str, f64)> = None;
        for area in &self.weak_areas {
            let topic = self
                .topic_breakdown
                .iter()
                .find(|b| &b.topic == area)
                .ok_or_else(|| {
                    DomainError::invalid_result(
                        &self.id,
                        format!("weak area '{}' is not in the topic breakdown", area),
                    )
                })?;
            if let Some((prev_name, prev_ratio)) = previous
                && topic.ratio() < prev_ratio
            {
                return Err(DomainError::invalid_result(
                    &self.id,
                    format!(
                        "weak area '{}' is weaker than '{}' but listed after it",
                        area, prev_name
                    ),
                ));
            }
            previous = Some((area.as_str(), topic.ratio()));
        }
        Ok(())
    }
}
