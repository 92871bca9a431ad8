//! Direction dispatch. Every error is caught here and turned into a
//! [`ConversionOutcome`]; nothing propagates past this point. Errors are
//! logged at debug level only; the outcome message reports them.

use std::path::{Path, PathBuf};

use tabconv_model::{ConversionOutcome, ConversionStatus, Direction};
use tabconv_transform::CoercionStats;
use tracing::debug;

use crate::context::ConversionContext;
use crate::error::{ConvertError, ErrorKind};
use crate::forward::convert_csv_to_json;
use crate::reverse::convert_json_to_csv;

/// Outcome of one invocation plus forward-only coercion statistics.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub direction: Direction,
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: ConversionOutcome,
    /// Present after a successful CSV to JSON conversion.
    pub stats: Option<CoercionStats>,
    /// Set when the conversion did not succeed.
    pub error_kind: Option<ErrorKind>,
}

/// Run one conversion in `direction` and report the outcome.
pub fn run_conversion(
    direction: Direction,
    input: &Path,
    output: &Path,
    context: &ConversionContext,
) -> ConversionReport {
    let mut report = ConversionReport {
        direction,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        outcome: ConversionOutcome::failed(String::new()),
        stats: None,
        error_kind: None,
    };
    let result = match direction {
        Direction::CsvToJson => convert_csv_to_json(input, output, context).map(|forward| {
            let outcome = ConversionOutcome::success(
                forward.records,
                format!(
                    "converted {} rows from {} to {}",
                    forward.records,
                    input.display(),
                    output.display()
                ),
            );
            report.stats = Some(forward.stats);
            outcome
        }),
        Direction::JsonToCsv => convert_json_to_csv(input, output).map(|reverse| {
            ConversionOutcome::success(
                reverse.records,
                format!(
                    "converted {} records from {} to {}",
                    reverse.records,
                    input.display(),
                    output.display()
                ),
            )
        }),
    };
    report.outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            report.error_kind = Some(err.kind());
            outcome_from_error(direction, &err)
        }
    };
    report
}

fn outcome_from_error(direction: Direction, err: &ConvertError) -> ConversionOutcome {
    match err.status() {
        ConversionStatus::NothingToWrite => {
            debug!(%direction, error = %err, "nothing to write");
            ConversionOutcome::nothing_to_write(format!(
                "{err}; no {} file was created",
                direction.output_format()
            ))
        }
        _ => {
            debug!(%direction, error = %err, "conversion failed");
            ConversionOutcome::failed(err.to_string())
        }
    }
}
