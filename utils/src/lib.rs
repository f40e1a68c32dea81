//! Shared utilities for the InstinctFi core.

pub mod format;
pub mod logging;

pub use format::{format_cents, format_time_left};
pub use logging::init_tracing;
