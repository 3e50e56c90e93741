//! Select Questions use case.
//!
//! Turns a requested (subject, topic, count) into a bounded, shuffled set of
//! questions through a three-tier cascade:
//!
//! 1. **Topic match**: bank topic contains the requested topic (case-insensitive)
//! 2. **Subject-wide**: any question of the subject, when tier 1 is empty
//! 3. **Synthetic**: `count` placeholders, when the subject has no questions
//!
//! Every returned question carries the requested topic as its
//! `syllabus_topic`, whichever tier supplied it.

use crate::config::SelectionParams;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::question_bank::QuestionBankProvider;
use crate::ports::random::{RandomSource, shuffle_with};
use prep_domain::{
    ExamType, GeneratedQuestion, Question, SelectionTier, placeholder_questions,
};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Input for the [`SelectQuestionsUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuestionsInput {
    pub subject: String,
    pub topic: String,
    pub count: usize,
    pub exam_type: ExamType,
}

impl SelectQuestionsInput {
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        count: usize,
        exam_type: ExamType,
    ) -> Self {
        Self {
            subject: subject.into(),
            topic: topic.into(),
            count,
            exam_type,
        }
    }
}

/// Questions chosen for a request and the tier that supplied them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSelection {
    pub questions: Vec<GeneratedQuestion>,
    pub tier: SelectionTier,
}

impl QuestionSelection {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Use case for selecting practice questions.
///
/// Holds only read-only collaborators, so concurrent selections never
/// interfere with each other.
#[derive(Clone)]
pub struct SelectQuestionsUseCase {
    bank: Arc<dyn QuestionBankProvider>,
    random: Arc<dyn RandomSource>,
    params: SelectionParams,
}

impl SelectQuestionsUseCase {
    pub fn new(bank: Arc<dyn QuestionBankProvider>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            bank,
            random,
            params: SelectionParams::default(),
        }
    }

    pub fn with_params(mut self, params: SelectionParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &SelectionParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: SelectQuestionsInput) -> QuestionSelection {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Awaits the configured latency before resolving; dropping the future
    /// abandons the selection without side effects.
    pub async fn execute_with_progress(
        &self,
        input: SelectQuestionsInput,
        progress: &dyn ProgressNotifier,
    ) -> QuestionSelection {
        progress.on_selection_start(&input.subject, &input.topic);

        if !self.params.latency.is_zero() {
            tokio::time::sleep(self.params.latency).await;
        }

        let selection = self.select(&input);

        info!(
            "Selected {} question(s) for {} / {} via {} tier",
            selection.len(),
            input.subject,
            input.topic,
            selection.tier
        );
        progress.on_selection_complete(selection.len(), selection.tier);

        selection
    }

    /// Run the cascade without the simulated delay.
    pub fn select(&self, input: &SelectQuestionsInput) -> QuestionSelection {
        let pool = self.bank.questions_for_subject(&input.subject);

        let topic_matches: Vec<Question> = pool
            .iter()
            .filter(|q| q.matches_topic(&input.topic))
            .cloned()
            .collect();

        debug!(
            "Subject '{}' has {} question(s), {} matching topic '{}'",
            input.subject,
            pool.len(),
            topic_matches.len(),
            input.topic
        );

        let (candidates, tier) = if !topic_matches.is_empty() {
            (topic_matches, SelectionTier::TopicMatch)
        } else if !pool.is_empty() {
            (pool, SelectionTier::SubjectWide)
        } else {
            let batch = next_batch_id();
            debug!("No content for '{}', generating placeholders (batch {})", input.subject, batch);
            return QuestionSelection {
                questions: placeholder_questions(
                    &input.subject,
                    &input.topic,
                    &input.exam_type,
                    input.count,
                    &batch,
                ),
                tier: SelectionTier::Synthetic,
            };
        };

        let mut shuffled = shuffle_with(self.random.as_ref(), candidates);
        shuffled.truncate(input.count);

        QuestionSelection {
            questions: shuffled
                .into_iter()
                .map(|q| GeneratedQuestion::new(q, input.topic.clone()))
                .collect(),
            tier,
        }
    }
}

/// Unique placeholder batch id: generation time in milliseconds plus a
/// process-wide sequence number, so two calls within the same millisecond
/// still differ.
fn next_batch_id() -> String {
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), sequence)
}
