//! Infrastructure layer for exam-prep
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod content;
pub mod exam_store;
pub mod gemini;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAiConfig, FileConfig, FileContentConfig, FileHistoryConfig,
    FileOutputConfig, FileSelectionConfig,
};
pub use content::{ContentError, StaticQuestionBank, load_syllabus};
pub use exam_store::{ExamRecord, JsonExamStore};
pub use gemini::GeminiLlmGateway;
pub use random::{SeededRandomSource, ThreadRngSource};
