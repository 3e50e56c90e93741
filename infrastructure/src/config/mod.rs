//! Configuration file loading for exam-prep
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EXAM_PREP_*` environment variables (nested keys split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./exam-prep.toml` or `./.exam-prep.toml`
//! 4. Global: `$XDG_CONFIG_HOME/exam-prep/config.toml` (or `~/.config/...`)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAiConfig, FileConfig, FileContentConfig, FileHistoryConfig, FileOutputConfig,
    FileSelectionConfig,
};
pub use loader::ConfigLoader;
