// src/cli/mod.rs

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod manifest;
pub mod output;

/// How the host binary prints the final bindings.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `name=value` lines, quoted so a shell can `eval` them.
    #[default]
    Shell,
    /// A single JSON object, in declaration order.
    Json,
    /// The same `name = value` dump `--show_params` prints.
    Dump,
}

/// declargs: declare typed parameters in a manifest, bind them from the command line.
///
/// Everything after `--` is handed to the binding engine, which understands
/// `--name`, `--name=value`, `--name value` and `--noname`. Use `-- --help` to
/// see the table of declared parameters.
///
/// Example:
///   eval "$(declargs --manifest params.toml -- "$@")"
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// TOML file with one `[[param]]` table per declared parameter.
    #[arg(long, short)]
    pub manifest: PathBuf,

    /// Output format for the resolved bindings.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Shell)]
    pub format: OutputFormat,

    /// The arguments to bind. Must come after `--`.
    #[arg(last = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
