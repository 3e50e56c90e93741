//! Domain layer for exam-prep
//!
//! This crate contains the entities, value objects and pure business rules
//! of exam practice. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questions
//!
//! - **Question**: an authored multiple-choice item tagged with a bank topic
//! - **GeneratedQuestion**: a question served under a requested syllabus topic
//! - **Placeholder**: a synthetic stand-in for subjects with no content yet
//!
//! ## Performance
//!
//! - **ExamResult**: accuracy, topic breakdown and weak areas of an attempt
//! - **PerformanceBand**: Excellent (≥ 70) / Average (≥ 50) / Needs Work

pub mod config;
pub mod core;
pub mod narrative;
pub mod performance;
pub mod prompt;
pub mod question;
pub mod syllabus;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    exam_type::{ExamMode, ExamType},
};
pub use narrative::{CALL_FAILED_FALLBACK, FallbackReason, NO_CREDENTIAL_FALLBACK, NarrativeOutcome};
pub use performance::{
    analyzer::{AnsweredQuestion, ExamAttempt, PerformanceAnalyzer},
    band::{AVERAGE_THRESHOLD, PerformanceBand, STRONG_THRESHOLD},
    history::{DashboardData, DashboardSummary, ExamHistoryItem},
    result::{ExamResult, TopicBreakdown, rank_weak_areas},
};
pub use prompt::AnalysisPromptTemplate;
pub use question::{
    entities::{AnswerOption, Difficulty, GeneratedQuestion, Question},
    placeholder::{PLACEHOLDER_CORRECT_OPTION, is_placeholder_id, placeholder_questions},
    selection::SelectionTier,
};
pub use syllabus::{SyllabusIndex, SyllabusTopic};
