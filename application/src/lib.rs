//! Application layer for exam-prep
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod liveness;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{NarrativeParams, SelectionParams};
pub use liveness::{RequestTicket, RequestTracker};
pub use ports::{
    exam_service::{ExamService, ExamServiceError},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    question_bank::QuestionBankProvider,
    random::{IdentityOrder, RandomSource, shuffle_with},
};
pub use use_cases::generate_analysis::GenerateAnalysisUseCase;
pub use use_cases::load_dashboard::{Dashboard, LoadDashboardError, LoadDashboardUseCase};
pub use use_cases::review_result::{ResultReview, ReviewResultError, ReviewResultUseCase};
pub use use_cases::score_attempt::{ScoreAttemptError, ScoreAttemptInput, ScoreAttemptUseCase};
pub use use_cases::select_questions::{
    QuestionSelection, SelectQuestionsInput, SelectQuestionsUseCase,
};
