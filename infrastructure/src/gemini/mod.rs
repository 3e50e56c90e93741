//! Gemini text-generation adapter
//!
//! Implements [`LlmGateway`](prep_application::LlmGateway) over the
//! `generateContent` REST endpoint.

pub mod gateway;
pub mod protocol;

pub use gateway::GeminiLlmGateway;
