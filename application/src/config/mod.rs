//! Application-level configuration.
//!
//! - [`SelectionParams`]: question selection defaults and simulated latency
//! - [`NarrativeParams`]: narrative generation timeout

pub mod params;

pub use params::{NarrativeParams, SelectionParams};
