mod check;
mod checker_config;

use anyhow::Result;
use clap::Subcommand;

////////////////////////////////////////////////////////////////////////////////

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Lint, build and test tasks.
    Check(check::CheckArgs),
}

pub fn run_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Check(args) => check::check(args),
    }
}
