//! `PersonaForge` — loader and validator for agent persona configuration files

use clap::Parser;

use personaforge::cli::args::Cli;
use personaforge::cli::commands;
use personaforge::error::ExitCode;
use personaforge::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
