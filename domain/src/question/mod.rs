//! Practice questions.
//!
//! - [`entities::Question`]: an authored multiple-choice question from the bank
//! - [`entities::GeneratedQuestion`]: a question as served for a requested syllabus topic
//! - [`placeholder`]: synthetic stand-ins for subjects with no authored content
//! - [`selection::SelectionTier`]: the cascade step that supplied a selection

pub mod entities;
pub mod placeholder;
pub mod selection;
