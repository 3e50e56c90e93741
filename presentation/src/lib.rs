//! Presentation layer for exam-prep
//!
//! This crate contains CLI definitions, output formatters,
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, PracticeArgs};
pub use config::OutputConfig;
pub use output::{console::ConsoleFormatter, report::PracticeReport};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
