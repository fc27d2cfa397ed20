/// Sample statistics for benchmark summaries
pub mod statistics;
