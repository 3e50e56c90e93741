//! Review Result use case.
//!
//! Loads one stored exam result, checks its invariants and attaches the
//! narrative summary. A failed fetch or an inconsistent result is an error
//! for the caller to display; a failed narrative only degrades to fallback
//! text.

use crate::ports::exam_service::{ExamService, ExamServiceError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::generate_analysis::GenerateAnalysisUseCase;
use prep_domain::{DomainError, ExamResult, NarrativeOutcome, PerformanceBand};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while reviewing a result
#[derive(Error, Debug)]
pub enum ReviewResultError {
    #[error("Could not load exam result: {0}")]
    Service(#[from] ExamServiceError),

    #[error(transparent)]
    InvalidResult(#[from] DomainError),
}

/// A stored result with its band and narrative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReview {
    pub result: ExamResult,
    pub band: PerformanceBand,
    pub narrative: NarrativeOutcome,
}

/// Use case for reviewing a stored result
pub struct ReviewResultUseCase {
    service: Arc<dyn ExamService>,
    analysis: GenerateAnalysisUseCase,
}

impl ReviewResultUseCase {
    pub fn new(service: Arc<dyn ExamService>, analysis: GenerateAnalysisUseCase) -> Self {
        Self { service, analysis }
    }

    pub async fn execute(&self, exam_id: &str) -> Result<ResultReview, ReviewResultError> {
        self.execute_with_progress(exam_id, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        exam_id: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<ResultReview, ReviewResultError> {
        let result = self
            .service
            .get_result_by_id(exam_id)
            .await
            .inspect_err(|e| warn!("Result fetch for {} failed: {}", exam_id, e))?;

        result
            .validate()
            .inspect_err(|e| warn!("Rejecting stored result {}: {}", exam_id, e))?;

        let narrative = self.analysis.execute_with_progress(&result, progress).await;

        Ok(ResultReview {
            band: result.band(),
            result,
            narrative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::load_dashboard::tests::FakeExamService;
    use prep_domain::{ExamMode, ExamType, FallbackReason, TopicBreakdown};
    use std::collections::HashMap;

    fn result(id: &str, total_questions: u32) -> ExamResult {
        ExamResult {
            id: id.to_string(),
            exam_type: ExamType::Neco,
            mode: ExamMode::Practice,
            subject: Some("Chemistry".to_string()),
            accuracy: 75.0,
            score: 75.0,
            total_questions,
            time_spent_seconds: 400,
            weak_areas: vec![],
            topic_breakdown: vec![
                TopicBreakdown::new("Acids and Bases", 2, 2),
                TopicBreakdown::new("Organic Chemistry", 1, 2),
            ],
        }
    }

    fn use_case(fail: bool) -> ReviewResultUseCase {
        let service = Arc::new(FakeExamService {
            history: HashMap::new(),
            results: HashMap::from([
                ("ok".to_string(), result("ok", 4)),
                ("broken".to_string(), result("broken", 9)),
            ]),
            fail,
        });
        ReviewResultUseCase::new(service, GenerateAnalysisUseCase::new(None))
    }

    #[tokio::test]
    async fn test_review_attaches_band_and_narrative() {
        let review = use_case(false).execute("ok").await.unwrap();
        assert_eq!(review.band, PerformanceBand::Excellent);
        assert_eq!(
            review.narrative.fallback_reason(),
            Some(FallbackReason::MissingCredential)
        );
    }

    #[tokio::test]
    async fn test_missing_result_is_surfaced() {
        let err = use_case(false).execute("missing").await.unwrap_err();
        assert!(matches!(err, ReviewResultError::Service(ExamServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_inconsistent_result_is_rejected() {
        let err = use_case(false).execute("broken").await.unwrap_err();
        assert!(matches!(err, ReviewResultError::InvalidResult(_)));
    }

    #[tokio::test]
    async fn test_service_outage_is_surfaced() {
        let err = use_case(true).execute("ok").await.unwrap_err();
        assert!(err.to_string().starts_with("Could not load exam result"));
    }
}
