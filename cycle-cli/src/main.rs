//! Cycle CLI - charts, listings and summaries of cycling rides.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cycle-cli",
    version,
    about = "Cycling ride statistics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cycle_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting cycle-cli");
    cycle_cmd::run(cli.command)
}
