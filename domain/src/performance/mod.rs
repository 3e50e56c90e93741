//! Performance scoring.
//!
//! - [`band::PerformanceBand`]: the single three-tier banding table shared by
//!   weak-area detection and presentation
//! - [`result::ExamResult`]: the scored outcome of one completed attempt
//! - [`analyzer::PerformanceAnalyzer`]: raw answers → [`result::ExamResult`]
//! - [`history`]: lightweight listing items and dashboard aggregates

pub mod analyzer;
pub mod band;
pub mod history;
pub mod result;
