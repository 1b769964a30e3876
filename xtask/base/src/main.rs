use xtask_base::{run_command, Command};

use anyhow::Result;
use clap::Parser;

////////////////////////////////////////////////////////////////////////////////

/// Maintenance commands for the exercise tasks.
#[derive(Parser, Debug)]
#[command(name = "xtask", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

fn main() -> Result<()> {
    run_command(Args::parse().cmd)
}
