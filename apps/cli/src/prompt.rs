//! # Prompt Helpers
//!
//! Re-prompting input loops used by the record operations.
//!
//! Invalid text prints the coercion error and asks again, with no retry
//! cap. The loop only ends without a value when the terminal runs out of
//! input, which surfaces as [`CliError::Cancelled`].

use inventario_core::validation::ValidationResult;

use crate::error::{CliError, CliResult};
use crate::terminal::{Terminal, Tone};

/// Reads one line; end of input cancels the current operation.
pub fn read_text(term: &mut impl Terminal, prompt: &str) -> CliResult<String> {
    term.read_line(prompt)?.ok_or(CliError::Cancelled)
}

/// Asks until `parse` accepts the input.
pub fn read_required<T>(
    term: &mut impl Terminal,
    prompt: &str,
    parse: impl Fn(&str) -> ValidationResult<T>,
) -> CliResult<T> {
    loop {
        let input = read_text(term, prompt)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => term.write_line(Tone::Failure, &format!("Error: {}.", e))?,
        }
    }
}

/// Like [`read_required`], but blank input yields `current`.
pub fn read_or_default<T>(
    term: &mut impl Terminal,
    prompt: &str,
    current: T,
    parse: impl Fn(&str) -> ValidationResult<T>,
) -> CliResult<T> {
    loop {
        let input = read_text(term, prompt)?;
        if input.is_empty() {
            return Ok(current);
        }
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => term.write_line(Tone::Failure, &format!("Error: {}.", e))?,
        }
    }
}

/// Integer field, re-prompting on anything that isn't a whole number.
pub fn read_required_int(
    term: &mut impl Terminal,
    prompt: &str,
    parse: fn(&str) -> ValidationResult<i64>,
) -> CliResult<i64> {
    read_required(term, prompt, parse)
}

/// Floating-point field, re-prompting on anything that isn't a number.
pub fn read_required_float(
    term: &mut impl Terminal,
    prompt: &str,
    parse: fn(&str) -> ValidationResult<f64>,
) -> CliResult<f64> {
    read_required(term, prompt, parse)
}

/// Text field where blank input keeps `current_value`.
pub fn read_optional_with_default(
    term: &mut impl Terminal,
    prompt: &str,
    current_value: &str,
) -> CliResult<String> {
    let input = read_text(term, prompt)?;
    if input.is_empty() {
        Ok(current_value.to_string())
    } else {
        Ok(input)
    }
}
