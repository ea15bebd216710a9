mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod tools;
mod utils;

use clap::Parser;

use cli::{Cli, parse_command};
use config::Config;
use error::AppError;
use utils::set_debug;

fn exit_with(e: &AppError) -> ! {
    if e.should_report() {
        eprintln!("{e}");
    }
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = Cli::parse();

    // On before config loading so `--debug` reports which file was used
    set_debug(cli.debug);
    let config = Config::load().unwrap_or_else(|e| exit_with(&e));
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    let command = parse_command(cli.command);
    if let Err(e) = app::run_command(command, &cli) {
        exit_with(&e);
    }
}
