//! CLI-specific UI output and formatting modules

pub mod format;
pub mod output;

pub use output::{Output, OutputMode};
