//! Exam service port
//!
//! Persistence of exam history is owned by an external service; this port is
//! the read side the application needs.

use async_trait::async_trait;
use prep_domain::{DashboardData, ExamResult};
use thiserror::Error;

/// Errors surfaced by the exam service
#[derive(Error, Debug)]
pub enum ExamServiceError {
    #[error("Exam result not found: {0}")]
    NotFound(String),

    #[error("Exam service unavailable: {0}")]
    Unavailable(String),

    #[error("Exam service returned invalid data: {0}")]
    InvalidData(String),
}

#[async_trait]
pub trait ExamService: Send + Sync {
    /// Recent activity of a student
    async fn get_dashboard_data(&self, student_id: &str) -> Result<DashboardData, ExamServiceError>;

    /// A single stored result
    async fn get_result_by_id(&self, exam_id: &str) -> Result<ExamResult, ExamServiceError>;
}
