//! Prompt-driven shell: asks for the direction and both paths.
//!
//! The shell only resolves a `(direction, input, output)` triple; the
//! conversion itself is run by the caller.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tabconv_model::Direction;

/// A fully resolved conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub direction: Direction,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Ask for a direction (re-prompting until `1` or `2`), then for the input
/// and output paths. An empty answer takes the direction's default.
///
/// # Errors
///
/// Fails on I/O errors, or if input ends before a direction was chosen.
pub fn prompt_request<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<ConversionRequest> {
    writeln!(out)?;
    writeln!(out, "--- CSV/JSON CONVERTER ---")?;
    let direction = loop {
        let answer = ask(
            input,
            out,
            "Choose conversion mode (1: CSV -> JSON, 2: JSON -> CSV): ",
        )?
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no conversion mode chosen")
        })?;
        match answer.as_str() {
            "1" => break Direction::CsvToJson,
            "2" => break Direction::JsonToCsv,
            _ => writeln!(out, "Please enter 1 or 2.")?,
        }
    };

    let input_path = ask_path(
        input,
        out,
        &format!("{} input file", direction.input_format()),
        direction.default_input(),
    )?;
    let output_path = ask_path(
        input,
        out,
        &format!("{} output file", direction.output_format()),
        direction.default_output(),
    )?;
    Ok(ConversionRequest {
        direction,
        input: input_path,
        output: output_path,
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: &str,
) -> io::Result<PathBuf> {
    let answer = ask(input, out, &format!("{label} (default: {default}): "))?;
    Ok(match answer {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(default),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (io::Result<ConversionRequest>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = prompt_request(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn defaults_for_forward() {
        let (request, _) = run("1\n\n\n");
        assert_eq!(
            request.unwrap(),
            ConversionRequest {
                direction: Direction::CsvToJson,
                input: PathBuf::from("voucher_test_cases.csv"),
                output: PathBuf::from("new_voucher_test_cases.json"),
            }
        );
    }

    #[test]
    fn explicit_paths_for_reverse() {
        let (request, transcript) = run("2\n  data.json \nout.csv\n");
        let request = request.unwrap();
        assert_eq!(request.direction, Direction::JsonToCsv);
        assert_eq!(request.input, PathBuf::from("data.json"));
        assert_eq!(request.output, PathBuf::from("out.csv"));
        assert!(transcript.contains("JSON input file (default: voucher_test_cases.json): "));
        assert!(transcript.contains("CSV output file (default: new_voucher_test_cases.csv): "));
    }

    #[test]
    fn reprompts_until_valid_mode() {
        let (request, transcript) = run("3\nabc\n2\n\n\n");
        assert_eq!(request.unwrap().direction, Direction::JsonToCsv);
        assert_eq!(transcript.matches("Please enter 1 or 2.").count(), 2);
    }

    #[test]
    fn eof_before_mode_is_error() {
        let (request, _) = run("");
        assert_eq!(request.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn eof_on_paths_takes_defaults() {
        let (request, _) = run("1\n");
        let request = request.unwrap();
        assert_eq!(request.input, PathBuf::from("voucher_test_cases.csv"));
        assert_eq!(request.output, PathBuf::from("new_voucher_test_cases.json"));
    }
}
