//! Numeric and boolean rules.
//!
//! `multiple_of` uses the IEEE truncated remainder on `f64` (the result takes
//! the dividend's sign), so `-9 % 3` and `7.5 % 2.5` are both exact multiples
//! while `2.5 % 1` is not. When both the input and `multiple` are whole
//! numbers the remainder is taken in `i64` instead, so integers beyond 2^53
//! are not rounded first.
//!
//! `range` compares as `f64`: an integer above 2^53 is rounded to the nearest
//! representable value before it meets the bounds. The derived `value` of
//! both kinds is that `f64` reading.

use super::patterns::{FLOAT_PATTERN, INTEGER_PATTERN, NUMERIC_PATTERN};
use crate::options::Options;
use crate::types::{DerivedValue, Input, Outcome};
use crate::CheckError;

/// Read the input as a number: native numbers as-is, text by the numeric grammar.
pub fn numeric_value(input: &Input) -> Option<f64> {
    match input {
        Input::Int(value) => Some(*value as f64),
        Input::Float(value) => Some(*value),
        Input::Text(value) if NUMERIC_PATTERN.is_match(value) => value.trim().parse().ok(),
        _ => None,
    }
}

pub fn numeric(input: &Input, outcome: &mut Outcome) {
    let Some(value) = numeric_value(input) else {
        return;
    };
    outcome.valid = true;
    outcome.length = input.as_text().map(|text| text.len());
    outcome.value = Some(DerivedValue::Float(value));
}

pub fn boolean(input: &Input, outcome: &mut Outcome) {
    let Some(value) = input.as_text().and_then(|text| parse_bool(&text)) else {
        return;
    };
    outcome.valid = true;
    outcome.value = Some(DerivedValue::Bool(value));
}

/// Recognized boolean tokens, case-insensitive, surrounding whitespace ignored.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}

pub fn integer(input: &Input, outcome: &mut Outcome) {
    let Some(value) = input.as_text().and_then(|text| parse_integer(&text)) else {
        return;
    };
    outcome.valid = true;
    outcome.value = Some(DerivedValue::Integer(value));
}

fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if !INTEGER_PATTERN.is_match(trimmed) {
        return None;
    }
    // Out-of-range literals fail here
    trimmed.parse().ok()
}

pub fn float(input: &Input, outcome: &mut Outcome) {
    let Some(value) = input.as_text().and_then(|text| parse_float(&text)) else {
        return;
    };
    outcome.valid = true;
    outcome.value = Some(DerivedValue::Float(value));
}

fn parse_float(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !FLOAT_PATTERN.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Inclusive bounds; unset bounds are the extremes of `f64`.
pub fn range(input: &Input, options: &Options, outcome: &mut Outcome) {
    let Some(value) = numeric_value(input) else {
        return;
    };
    let min = options.min.unwrap_or(f64::MIN);
    let max = options.max.unwrap_or(f64::MAX);

    if value >= min && value <= max {
        outcome.valid = true;
        outcome.value = Some(DerivedValue::Float(value));
    }
}

pub fn multiple_of(input: &Input, options: &Options, outcome: &mut Outcome) -> Result<(), CheckError> {
    let multiple = options.multiple.unwrap_or(1.0);
    check_multiple(multiple)?;

    let Some(value) = numeric_value(input) else {
        return Ok(());
    };
    let is_multiple = match (integer_value(input), whole_number(multiple)) {
        (Some(value), Some(multiple)) => value.wrapping_rem(multiple) == 0,
        _ => value % multiple == 0.0,
    };
    if is_multiple {
        outcome.valid = true;
        outcome.value = Some(DerivedValue::Float(value));
    }

    Ok(())
}

/// Exact integer reading of the input, when it has one.
fn integer_value(input: &Input) -> Option<i64> {
    match input {
        Input::Int(value) => Some(*value),
        Input::Text(value) => parse_integer(value),
        _ => None,
    }
}

fn whole_number(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value.abs() < i64::MAX as f64).then_some(value as i64)
}

/// A divisor of zero or a non-finite divisor makes every answer meaningless.
pub fn check_multiple(multiple: f64) -> Result<(), CheckError> {
    if multiple == 0.0 || !multiple.is_finite() {
        return Err(CheckError::invalid_option(
            "multiple",
            format!("must be a finite non-zero number, got {}", multiple),
        ));
    }
    Ok(())
}
