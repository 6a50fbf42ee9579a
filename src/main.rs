//! CLI entry point for the sorting and searching visualizer

use clap::Parser;
use sortviz::io::cli::{Cli, Runner};

fn main() -> sortviz::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = Runner::new(cli)?;
    runner.run()
}
