//! Exam history listing and dashboard aggregates

use super::band::PerformanceBand;
use super::result::ExamResult;
use crate::core::exam_type::{ExamMode, ExamType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lightweight summary of a stored [`ExamResult`] for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamHistoryItem {
    pub id: String,
    pub exam_type: ExamType,
    pub mode: ExamMode,
    pub date: DateTime<Utc>,
    pub accuracy: f64,
    /// Number of questions in the exam
    pub total: u32,
}

impl ExamHistoryItem {
    pub fn from_result(result: &ExamResult, date: DateTime<Utc>) -> Self {
        Self {
            id: result.id.clone(),
            exam_type: result.exam_type.clone(),
            mode: result.mode,
            date,
            accuracy: result.accuracy,
            total: result.total_questions,
        }
    }

    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_accuracy(self.accuracy)
    }
}

/// What the exam service returns for a student's dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub recent_activity: Vec<ExamHistoryItem>,
}

/// Aggregates shown above the history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub exams_taken: usize,
    pub average_accuracy: Option<f64>,
    pub best_accuracy: Option<f64>,
    /// Band of the most recent exam
    pub latest_band: Option<PerformanceBand>,
}

impl DashboardSummary {
    /// Summarize a history list; `None` fields when the list is empty.
    pub fn from_history(items: &[ExamHistoryItem]) -> Self {
        let exams_taken = items.len();
        let average_accuracy = (exams_taken > 0)
            .then(|| items.iter().map(|i| i.accuracy).sum::<f64>() / exams_taken as f64);
        let best_accuracy = items.iter().map(|i| i.accuracy).reduce(f64::max);
        let latest_band = items.iter().max_by_key(|i| i.date).map(ExamHistoryItem::band);

        Self {
            exams_taken,
            average_accuracy,
            best_accuracy,
            latest_band,
        }
    }
}
