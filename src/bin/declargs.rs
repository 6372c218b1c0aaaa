// src/bin/declargs.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use declargs::{
    cli::{Cli, manifest::Manifest, output},
    constants::HELP_EXIT_CODE,
    core::{diagnostics::StderrSink, parser},
};
use std::io::{self, Write};

/// The main entry point of the `declargs` binary.
/// It sets up logging, runs the engine and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // `--help` given to the engine is a request, not a failure: print the
        // table on stdout and stop with the help status.
        if let Some(parser::ParseError::HelpRequested { usage }) =
            e.downcast_ref::<parser::ParseError>()
        {
            print!("{}", usage);
            let _ = io::stdout().flush();
            std::process::exit(HELP_EXIT_CODE);
        }

        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Loads the manifest, binds the trailing arguments and prints the result.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let registry = Manifest::load(&cli.manifest)?.into_registry()?;

    let mut stdout = io::stdout().lock();
    let bindings = parser::run(&registry, cli.args.as_slice(), &mut StderrSink, &mut stdout)?;

    let rendered = output::format_bindings(&bindings, cli.format)?;
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
