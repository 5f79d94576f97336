//! gsflow CLI - inspect MODFLOW name files of GSFLOW models

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gsflow::util::diagnostic::emit;
use gsflow::NameFileError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<NameFileError>() {
            Some(nf) => emit(&nf.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("gsflow=debug")
    } else if cli.quiet {
        EnvFilter::new("gsflow=error")
    } else {
        EnvFilter::new("gsflow=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let global = cli.global_options();

    // Execute command
    match cli.command {
        Commands::Units(args) => commands::units::execute(args, &global),
        Commands::Find(args) => commands::find::execute(args, &global),
        Commands::Header(args) => commands::header::execute(args),
        Commands::Packages(args) => commands::packages::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
