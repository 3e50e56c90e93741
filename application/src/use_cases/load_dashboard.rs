//! Load Dashboard use case.
//!
//! Fetches a student's recent activity from the exam service. Fetch failures
//! are returned to the caller so the presentation layer can show a visible
//! error state; they are never retried here.

use crate::ports::exam_service::{ExamService, ExamServiceError};
use prep_domain::{DashboardSummary, ExamHistoryItem};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a dashboard
#[derive(Error, Debug)]
pub enum LoadDashboardError {
    #[error("Student id is empty")]
    EmptyStudentId,

    #[error("Could not load exam history: {0}")]
    Service(#[from] ExamServiceError),
}

/// History list (newest first) and its aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub student_id: String,
    pub history: Vec<ExamHistoryItem>,
    pub summary: DashboardSummary,
}

/// Use case for loading a student's dashboard
pub struct LoadDashboardUseCase {
    service: Arc<dyn ExamService>,
}

impl LoadDashboardUseCase {
    pub fn new(service: Arc<dyn ExamService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, student_id: &str) -> Result<Dashboard, LoadDashboardError> {
        let student_id = student_id.trim();
        if student_id.is_empty() {
            return Err(LoadDashboardError::EmptyStudentId);
        }

        let data = self
            .service
            .get_dashboard_data(student_id)
            .await
            .inspect_err(|e| warn!("Dashboard fetch for {} failed: {}", student_id, e))?;

        let mut history = data.recent_activity;
        history.sort_by(|a, b| b.date.cmp(&a.date));
        let summary = DashboardSummary::from_history(&history);

        info!(
            "Loaded {} history item(s) for student {}",
            history.len(),
            student_id
        );

        Ok(Dashboard {
            student_id: student_id.to_string(),
            history,
            summary,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use prep_domain::{DashboardData, ExamMode, ExamResult, ExamType};
    use std::collections::HashMap;

    /// In-memory exam service; `fail` makes every call error
    pub(crate) struct FakeExamService {
        pub(crate) history: HashMap<String, Vec<ExamHistoryItem>>,
        pub(crate) results: HashMap<String, ExamResult>,
        pub(crate) fail: bool,
    }

    #[async_trait]
    impl ExamService for FakeExamService {
        async fn get_dashboard_data(
            &self,
            student_id: &str,
        ) -> Result<DashboardData, ExamServiceError> {
            if self.fail {
                return Err(ExamServiceError::Unavailable("connection refused".to_string()));
            }
            Ok(DashboardData {
                recent_activity: self.history.get(student_id).cloned().unwrap_or_default(),
            })
        }

        async fn get_result_by_id(&self, exam_id: &str) -> Result<ExamResult, ExamServiceError> {
            if self.fail {
                return Err(ExamServiceError::Unavailable("connection refused".to_string()));
            }
            self.results
                .get(exam_id)
                .cloned()
                .ok_or_else(|| ExamServiceError::NotFound(exam_id.to_string()))
        }
    }

    fn item(id: &str, day: u32, accuracy: f64) -> ExamHistoryItem {
        ExamHistoryItem {
            id: id.to_string(),
            exam_type: ExamType::Jamb,
            mode: ExamMode::Timed,
            date: Utc.with_ymd_and_hms(2026, 5, day, 10, 0, 0).unwrap(),
            accuracy,
            total: 40,
        }
    }

    fn service(fail: bool) -> Arc<FakeExamService> {
        Arc::new(FakeExamService {
            history: HashMap::from([(
                "student-1".to_string(),
                vec![item("e1", 1, 55.0), item("e3", 20, 75.0), item("e2", 9, 35.0)],
            )]),
            results: HashMap::new(),
            fail,
        })
    }

    #[tokio::test]
    async fn test_history_sorted_newest_first() {
        let dashboard = LoadDashboardUseCase::new(service(false))
            .execute("student-1")
            .await
            .unwrap();
        let ids: Vec<_> = dashboard.history.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["e3", "e2", "e1"]);
        assert_eq!(dashboard.summary.exams_taken, 3);
        assert_eq!(dashboard.summary.best_accuracy, Some(75.0));
    }

    #[tokio::test]
    async fn test_unknown_student_has_empty_history() {
        let dashboard = LoadDashboardUseCase::new(service(false))
            .execute("nobody")
            .await
            .unwrap();
        assert!(dashboard.history.is_empty());
        assert!(dashboard.summary.average_accuracy.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_surfaced() {
        let err = LoadDashboardUseCase::new(service(true))
            .execute("student-1")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadDashboardError::Service(ExamServiceError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_blank_student_rejected() {
        let err = LoadDashboardUseCase::new(service(false))
            .execute("  ")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadDashboardError::EmptyStudentId));
    }
}
