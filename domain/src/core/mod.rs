//! Core domain concepts shared across all subdomains.
//!
//! - [`exam_type::ExamType`]: the examination body a question or result belongs to
//! - [`exam_type::ExamMode`]: practice vs timed attempts
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod exam_type;
