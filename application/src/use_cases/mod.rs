//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_analysis;
pub mod load_dashboard;
pub mod review_result;
pub mod score_attempt;
pub mod select_questions;
