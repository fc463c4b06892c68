//! CLI entry point for the blob autotiling toolkit

use blobtile::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> blobtile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run()
}
