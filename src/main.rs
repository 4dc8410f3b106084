mod age_cmd;
mod cli;
mod config;
mod convert;
mod curve_cmd;
mod display;
mod logging;
mod velocity_cmd;
mod zscores_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Zscores(args) => zscores_cmd::run(args, &config),
        Command::Velocity(args) => velocity_cmd::run(args),
        Command::Age(args) => age_cmd::run(args, &config),
        Command::Curve(args) => curve_cmd::run(args, &config),
    }
}
