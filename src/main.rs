use martian_robots::{
    config::Cli,
    logging,
    station::{IoConsole, SessionController},
};

use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::setup_logging(cli.log_filter())?;

    log::info!("Application starting...");

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open mission file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let console = IoConsole::new(reader, io::stdout().lock());

    let mut controller = SessionController::new(console);
    controller.run()?;

    Ok(())
}
