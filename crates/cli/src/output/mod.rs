//! Terminal output: tables, JSON documents, status lines and spinners

mod formatter;
mod progress;

pub use formatter::{Formatter, format_size, format_timestamp};
pub use progress::Spinner;

/// Output switches resolved from global flags and config defaults
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub no_color: bool,
    pub no_progress: bool,
    /// Suppress everything except errors
    pub quiet: bool,
}
