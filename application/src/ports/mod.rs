//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod exam_service;
pub mod llm_gateway;
pub mod progress;
pub mod question_bank;
pub mod random;
