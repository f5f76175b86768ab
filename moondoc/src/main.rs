//! `moondoc` - content pipeline for the Lua tutorial site

use clap::Parser;

use moondoc::cli::args::Cli;
use moondoc::cli::commands;
use moondoc::error::ExitCode;
use moondoc::observability::{LogFormat, init_logging};

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
