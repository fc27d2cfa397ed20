//! CLI entry point for map generation, path queries and planner benchmarks

use clap::Parser;
use env_logger::Env;
use gridbench::io::cli::{Cli, CommandRunner};

fn main() -> gridbench::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    runner.execute()
}
