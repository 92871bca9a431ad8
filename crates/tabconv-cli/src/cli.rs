//! CLI argument definitions for tabconv.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabconv",
    version,
    about = "Convert voucher test data between CSV and JSON",
    long_about = "Convert tabular records between CSV and JSON.\n\n\
                  CSV -> JSON trims values, parses numeric fields (thousands separators\n\
                  allowed) and marks local timestamps as UTC. JSON -> CSV writes null\n\
                  values as empty cells. Without a command, an interactive prompt asks\n\
                  for the direction and file names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML file classifying fields as float, integer, timestamp or text
    /// (replaces the built-in voucher fields).
    #[arg(long = "fields", value_name = "FILE", global = true)]
    pub fields: Option<PathBuf>,

    /// Abort when a numeric or timestamp field cannot be coerced.
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a CSV table into a JSON document list.
    CsvToJson(ConvertArgs),

    /// Convert a JSON document list into a CSV table.
    JsonToCsv(ConvertArgs),

    /// Prompt for the direction and file names.
    Interactive,

    /// List the active field classification.
    Fields,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input file (default depends on the direction).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (default depends on the direction).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
