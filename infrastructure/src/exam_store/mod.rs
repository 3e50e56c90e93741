//! JSON file-backed exam history
//!
//! The store is a JSON array of records:
//!
//! ```json
//! [{ "studentId": "s1", "date": "2026-03-01T09:00:00Z", "result": { ... } }]
//! ```
//!
//! The file is read on every call and never written.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prep_application::{ExamService, ExamServiceError};
use prep_domain::{DashboardData, ExamHistoryItem, ExamResult};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One stored exam
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    pub student_id: String,
    pub date: DateTime<Utc>,
    pub result: ExamResult,
}

/// Read-only [`ExamService`] over a JSON file
#[derive(Debug, Clone)]
pub struct JsonExamStore {
    path: PathBuf,
}

impl JsonExamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn records(&self) -> Result<Vec<ExamRecord>, ExamServiceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ExamServiceError::Unavailable(format!(
                    "history store {} does not exist",
                    self.path.display()
                )),
                _ => ExamServiceError::Unavailable(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )),
            })?;

        let records: Vec<ExamRecord> = serde_json::from_str(&raw)
            .map_err(|e| ExamServiceError::InvalidData(format!("{}: {}", self.path.display(), e)))?;
        debug!("Read {} exam records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

#[async_trait]
impl ExamService for JsonExamStore {
    async fn get_dashboard_data(&self, student_id: &str) -> Result<DashboardData, ExamServiceError> {
        let recent_activity = self
            .records()
            .await?
            .iter()
            .filter(|r| r.student_id == student_id)
            .map(|r| ExamHistoryItem::from_result(&r.result, r.date))
            .collect();
        Ok(DashboardData { recent_activity })
    }

    async fn get_result_by_id(&self, exam_id: &str) -> Result<ExamResult, ExamServiceError> {
        self.records()
            .await?
            .into_iter()
            .find(|r| r.result.id == exam_id)
            .map(|r| r.result)
            .ok_or_else(|| ExamServiceError::NotFound(exam_id.to_string()))
    }
}
