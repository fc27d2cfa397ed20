/// Command-line parsing and command execution
pub mod cli;
/// Tunable constants and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Benchmark progress bars
pub mod progress;
/// JSON grid records
pub mod records;
