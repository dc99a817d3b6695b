use anyhow::Result;
use clap::Parser;
use glyphsplit_cli::{cli::Cli, init_logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.command.verbose());
    cli.command.run()
}
