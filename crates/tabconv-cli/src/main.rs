//! tabconv CLI.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tabconv_cli::logging::{LogConfig, LogFormat, init_logging};
use tabconv_core::{ConversionContext, ConvertOptions, Direction, FieldClassification};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_convert, run_fields, run_interactive};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let context = match context_from_cli(&cli) {
        Ok(context) => context,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match cli.command {
        Some(Command::CsvToJson(args)) => {
            run_convert(Direction::CsvToJson, &args, &context)
                .outcome
                .status
                .exit_code()
        }
        Some(Command::JsonToCsv(args)) => {
            run_convert(Direction::JsonToCsv, &args, &context)
                .outcome
                .status
                .exit_code()
        }
        Some(Command::Fields) => {
            run_fields(&context);
            0
        }
        Some(Command::Interactive) | None => match run_interactive(&context) {
            Ok(report) => report.outcome.status.exit_code(),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Classification file and strict flag.
fn context_from_cli(cli: &Cli) -> Result<ConversionContext> {
    let classification = match &cli.fields {
        Some(path) => FieldClassification::load(path)
            .with_context(|| format!("load field classification {}", path.display()))?,
        None => FieldClassification::default(),
    };
    let options = if cli.strict {
        ConvertOptions::strict()
    } else {
        ConvertOptions::new()
    };
    Ok(ConversionContext::new()
        .with_classification(classification)
        .with_options(options))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
