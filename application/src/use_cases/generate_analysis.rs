//! Generate Analysis use case.
//!
//! Produces the short narrative summary of an [`ExamResult`]. The call never
//! fails: without a configured gateway it answers with the no-credential
//! fallback immediately, and any gateway failure (error, timeout, blank
//! output) is logged and replaced by the call-failure fallback.

use crate::config::NarrativeParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use prep_domain::util::truncate_str;
use prep_domain::{AnalysisPromptTemplate, ExamResult, FallbackReason, NarrativeOutcome};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for generating a performance narrative.
#[derive(Clone)]
pub struct GenerateAnalysisUseCase {
    gateway: Option<Arc<dyn LlmGateway>>,
    params: NarrativeParams,
}

impl GenerateAnalysisUseCase {
    /// `None` means no credential is configured.
    pub fn new(gateway: Option<Arc<dyn LlmGateway>>) -> Self {
        Self {
            gateway,
            params: NarrativeParams::default(),
        }
    }

    pub fn with_params(mut self, params: NarrativeParams) -> Self {
        self.params = params;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.gateway.is_some()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, result: &ExamResult) -> NarrativeOutcome {
        self.execute_with_progress(result, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        result: &ExamResult,
        progress: &dyn ProgressNotifier,
    ) -> NarrativeOutcome {
        progress.on_analysis_start(&result.exam_label());
        let outcome = self.generate(result).await;
        progress.on_analysis_complete(&outcome);
        outcome
    }

    async fn generate(&self, result: &ExamResult) -> NarrativeOutcome {
        let Some(gateway) = &self.gateway else {
            info!(
                "No text-generation credential configured; using offline summary for {}",
                result.id
            );
            return NarrativeOutcome::fallback(FallbackReason::MissingCredential);
        };

        let prompt = AnalysisPromptTemplate::analysis_prompt(result);
        debug!(
            "Requesting narrative for {} from {}: {}",
            result.id,
            gateway.model_name(),
            truncate_str(&prompt, 160)
        );

        let call = gateway.generate(&prompt);
        let response = match self.params.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => call.await,
        };

        match response {
            Ok(text) if !text.trim().is_empty() => {
                info!("Narrative generated for {}", result.id);
                NarrativeOutcome::generated(text.trim())
            }
            Ok(_) => {
                warn!(
                    "Narrative for {} from {} was empty; using fallback",
                    result.id,
                    gateway.model_name()
                );
                NarrativeOutcome::fallback(FallbackReason::CallFailed)
            }
            Err(e) => {
                warn!(
                    "Narrative generation for {} via {} failed: {}",
                    result.id,
                    gateway.model_name(),
                    e
                );
                NarrativeOutcome::fallback(FallbackReason::CallFailed)
            }
        }
    }

    /// Retained for older callers; concept explanations are no longer
    /// generated and this always resolves to `None`.
    #[deprecated(note = "concept explanations are no longer generated; always returns None")]
    pub async fn explain_concept(
        &self,
        _subject: &str,
        _topic: &str,
        _concept: &str,
    ) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use prep_domain::{
        CALL_FAILED_FALLBACK, ExamMode, ExamType, NO_CREDENTIAL_FALLBACK, SelectionTier,
        TopicBreakdown,
    };
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    enum Reply {
        Text(&'static str),
        Fail,
        Hang,
    }

    struct MockGateway {
        reply: Reply,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGateway {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        fn model_name(&self) -> &str {
            "mock-model"
        }

        async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.reply {
                Reply::Text(text) => Ok(text.to_string()),
                Reply::Fail => Err(GatewayError::RequestFailed("HTTP 503".to_string())),
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok("too late".to_string())
                }
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_selection_start(&self, _subject: &str, _topic: &str) {}
        fn on_selection_complete(&self, _count: usize, _tier: SelectionTier) {}

        fn on_analysis_start(&self, exam_label: &str) {
            self.events.lock().unwrap().push(format!("start {}", exam_label));
        }

        fn on_analysis_complete(&self, outcome: &NarrativeOutcome) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done generated={}", outcome.is_generated()));
        }
    }

    fn weak_result() -> ExamResult {
        ExamResult {
            id: "exam-42".to_string(),
            exam_type: ExamType::Jamb,
            mode: ExamMode::Timed,
            subject: Some("Mathematics".to_string()),
            accuracy: 42.0,
            score: 42.0,
            total_questions: 12,
            time_spent_seconds: 900,
            weak_areas: vec!["Algebra".to_string(), "Trigonometry".to_string()],
            topic_breakdown: vec![
                TopicBreakdown::new("Algebra", 1, 4),
                TopicBreakdown::new("Trigonometry", 1, 4),
                TopicBreakdown::new("Calculus", 3, 4),
            ],
        }
    }

    // ==================== Scenarios ====================

    #[tokio::test]
    async fn test_missing_credential_uses_fixed_fallback() {
        let outcome = GenerateAnalysisUseCase::new(None)
            .execute(&weak_result())
            .await;
        assert_eq!(outcome.text(), NO_CREDENTIAL_FALLBACK);
        assert_eq!(
            outcome.fallback_reason(),
            Some(FallbackReason::MissingCredential)
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_uses_distinct_fallback() {
        let gateway = MockGateway::new(Reply::Fail);
        let outcome = GenerateAnalysisUseCase::new(Some(gateway.clone()))
            .execute(&weak_result())
            .await;
        assert_eq!(outcome.text(), CALL_FAILED_FALLBACK);
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::CallFailed));
        assert_ne!(outcome.text(), NO_CREDENTIAL_FALLBACK);
        assert_eq!(gateway.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generated_text_is_trimmed() {
        let gateway = MockGateway::new(Reply::Text(
            "  You scored 42%. Work on Algebra and Trigonometry. You can do it!\n",
        ));
        let outcome = GenerateAnalysisUseCase::new(Some(gateway.clone()))
            .execute(&weak_result())
            .await;
        assert!(outcome.is_generated());
        assert_eq!(
            outcome.text(),
            "You scored 42%. Work on Algebra and Trigonometry. You can do it!"
        );

        let prompts = gateway.prompts.lock().unwrap();
        assert!(prompts[0].contains("Score: 42%"));
        assert!(prompts[0].contains("Algebra, Trigonometry"));
        assert!(prompts[0].contains("Practice Mode"));
    }

    #[tokio::test]
    async fn test_blank_output_counts_as_failure() {
        let gateway = MockGateway::new(Reply::Text("   \n"));
        let outcome = GenerateAnalysisUseCase::new(Some(gateway))
            .execute(&weak_result())
            .await;
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::CallFailed));
        assert!(!outcome.text().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_as_failure() {
        let gateway = MockGateway::new(Reply::Hang);
        let outcome = GenerateAnalysisUseCase::new(Some(gateway))
            .with_params(NarrativeParams::default().with_timeout(Some(Duration::from_secs(5))))
            .execute(&weak_result())
            .await;
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::CallFailed));
    }

    #[tokio::test]
    async fn test_progress_brackets_the_call() {
        let progress = RecordingProgress::default();
        GenerateAnalysisUseCase::new(None)
            .execute_with_progress(&weak_result(), &progress)
            .await;
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start JAMB Mathematics", "done generated=false"]
        );
    }

    #[tokio::test]
    async fn test_is_configured() {
        assert!(!GenerateAnalysisUseCase::new(None).is_configured());
        assert!(GenerateAnalysisUseCase::new(Some(MockGateway::new(Reply::Fail))).is_configured());
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn test_explain_concept_is_inert() {
        let gateway = MockGateway::new(Reply::Text("should not be called"));
        let uc = GenerateAnalysisUseCase::new(Some(gateway.clone()));
        assert!(uc.explain_concept("Physics", "Waves", "Doppler effect").await.is_none());
        assert!(gateway.prompts.lock().unwrap().is_empty());
    }
}
