use std::io;

use clap::Parser;

use pit_cli::{app, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = app::load_settings(&cli)?;

    logging::init_logging(cli.log_directive(&settings))?;

    let stdout = io::stdout();
    app::run(&cli, &settings, &mut stdout.lock())
}
