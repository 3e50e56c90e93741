//! Score Attempt use case.
//!
//! Pairs the questions of a practice selection with the student's chosen
//! options and scores them with [`PerformanceAnalyzer`].

use prep_domain::{
    AnsweredQuestion, DomainError, ExamAttempt, ExamMode, ExamResult, ExamType, GeneratedQuestion,
    PerformanceAnalyzer,
};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while scoring an attempt
#[derive(Error, Debug)]
pub enum ScoreAttemptError {
    #[error("Expected {expected} answer(s) but got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("Question {question_id} has no option '{option}'")]
    UnknownOption { question_id: String, option: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the [`ScoreAttemptUseCase`].
#[derive(Debug, Clone)]
pub struct ScoreAttemptInput {
    pub attempt_id: String,
    pub exam_type: ExamType,
    pub mode: ExamMode,
    pub subject: Option<String>,
    pub time_spent_seconds: u64,
    pub questions: Vec<GeneratedQuestion>,
    /// One entry per question, `None` for a skipped question
    pub selections: Vec<Option<String>>,
}

/// Use case for scoring a completed attempt
pub struct ScoreAttemptUseCase;

impl ScoreAttemptUseCase {
    pub fn execute(input: &ScoreAttemptInput) -> Result<ExamResult, ScoreAttemptError> {
        if input.questions.len() != input.selections.len() {
            return Err(ScoreAttemptError::AnswerCountMismatch {
                expected: input.questions.len(),
                actual: input.selections.len(),
            });
        }

        let mut answers = Vec::with_capacity(input.questions.len());
        for (question, selection) in input.questions.iter().zip(&input.selections) {
            let selected = selection.as_deref().map(normalize_option);
            if let Some(option) = &selected
                && question.option(option).is_none()
            {
                return Err(ScoreAttemptError::UnknownOption {
                    question_id: question.id.clone(),
                    option: option.clone(),
                });
            }
            answers.push(AnsweredQuestion::from_question(question, selected.as_deref()));
        }

        let attempt = ExamAttempt {
            id: input.attempt_id.clone(),
            exam_type: input.exam_type.clone(),
            mode: input.mode,
            subject: input.subject.clone(),
            time_spent_seconds: input.time_spent_seconds,
            answers,
        };

        let result = PerformanceAnalyzer::analyze(&attempt)?;
        info!(
            "Scored attempt {}: {:.1}% over {} question(s), {} weak area(s)",
            result.id,
            result.accuracy,
            result.total_questions,
            result.weak_areas.len()
        );
        Ok(result)
    }
}

/// Option ids are short lowercase labels; accept `"A"` or `" b "` too.
fn normalize_option(option: &str) -> String {
    option.trim().to_lowercase()
}
