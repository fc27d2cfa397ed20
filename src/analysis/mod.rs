/// Benchmark configuration, execution and summaries
pub mod benchmark;
/// Per-run path quality metrics
pub mod metrics;
