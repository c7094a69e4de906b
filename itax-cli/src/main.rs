use std::io;

use clap::Parser;

use itax_cli::cli::Cli;
use itax_cli::{logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let stdout = io::stdout();
    run(&cli.command, &mut stdout.lock())
}
