//! Read-only exam content: the question bank and the syllabus index.
//!
//! Both ship embedded in the binary and can be replaced by user files
//! (`[content]` in the config). They are loaded once at startup and
//! shared behind an `Arc`.

mod error;
mod question_bank;
mod syllabus;

pub use error::ContentError;
pub use question_bank::StaticQuestionBank;
pub use syllabus::load_syllabus;

pub(crate) fn read_file(path: &std::path::Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|e| ContentError::io(path, e))
}
