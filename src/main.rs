//! aisctl CLI entry point

use std::process::ExitCode;

use clap::Parser;

use aisctl::cli::{app, args::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    app::init_logging(cli.verbose);
    app::run(cli)
}
