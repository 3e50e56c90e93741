//! Prompt templates for text generation.

mod template;

pub use template::{AnalysisPromptTemplate, PRACTICE_MODE_THRESHOLD};
