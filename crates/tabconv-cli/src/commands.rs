use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tabconv_core::{ConversionContext, ConversionReport, Direction, run_conversion};
use tracing::info;

use crate::cli::ConvertArgs;
use tabconv_cli::interactive::prompt_request;
use tabconv_cli::summary::{fields_table, print_report};

pub fn run_convert(
    direction: Direction,
    args: &ConvertArgs,
    context: &ConversionContext,
) -> ConversionReport {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(direction.default_input()));
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(direction.default_output()));
    let report = run_conversion(direction, &input, &output, context);
    print_report(&report);
    report
}

pub fn run_interactive(context: &ConversionContext) -> Result<ConversionReport> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let request =
        prompt_request(&mut stdin.lock(), &mut stdout).context("read conversion request")?;
    info!(direction = %request.direction, "interactive request");
    writeln!(
        stdout,
        "\nConverting {} -> {}...",
        request.input.display(),
        request.output.display()
    )?;
    let report = run_conversion(request.direction, &request.input, &request.output, context);
    print_report(&report);
    writeln!(stdout, "\nDone.")?;
    Ok(report)
}

pub fn run_fields(context: &ConversionContext) {
    println!("{}", fields_table(&context.classification));
    println!("Fields not listed are text.");
}
