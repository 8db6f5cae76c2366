//! The `Number` type
//!
//! Payloads are `f64`. Literals follow the usual decimal notation with a few
//! relaxations: a leading `.` is allowed, as is a trailing `.`, and a dangling
//! exponent marker (`2.1e`, `2.1e+`) is ignored.

use lazy_static::lazy_static;
use polyface_types::{Param, SyntaxError, TypeNode, TypeSpec, Value};

/// Largest integer an `f64` represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Smallest integer an `f64` represents exactly
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

lazy_static! {
    /// Concrete type of plain numbers
    pub static ref NUMBER: TypeNode = TypeSpec::named("Number")
        .with_parse(|source, _| parse_number(source).map(Value::Number))
        .with_stringify(|value, params| match value.as_f64() {
            Some(number) => stringify_number(number, to_exp_flag(params)),
            None => value.to_string(),
        })
        .build()
        .expect("Number type configuration is complete");
}

/// Parse a decimal number literal.
///
/// Only digits, `.`, `e`/`E` and signs are accepted, so `inf`, `nan` and hex
/// forms are rejected.
pub fn parse_number(source: &str) -> Result<f64, SyntaxError> {
    let mut code = source.trim().to_lowercase();
    if code.is_empty() {
        return Err(SyntaxError::invalid_number(source, "empty literal"));
    }
    if code.starts_with('.') {
        code.insert(0, '0');
    }

    let parts: Vec<&str> = code.split('e').collect();
    let literal = match parts.as_slice() {
        [mantissa] => *mantissa,
        [mantissa, "" | "+" | "-" | "+-"] => *mantissa,
        [_, _] => code.as_str(),
        _ => return Err(SyntaxError::invalid_number(source, "more than one exponent")),
    };

    if !literal
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | '+' | '-'))
    {
        return Err(SyntaxError::invalid_number(source, "unexpected character"));
    }

    literal
        .parse::<f64>()
        .map_err(|_| SyntaxError::invalid_number(source, "not a decimal number"))
}

/// Serialize a number in its shortest form.
///
/// Exponential notation (`1.234e+3`) is used when `to_exp` is set, when the
/// value lies outside the safe integer range, or for magnitudes below 1e-6.
pub fn stringify_number(value: f64, to_exp: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if to_exp { "0e+0" } else { "0" }.to_string();
    }

    let oversized = !(MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value);
    if to_exp || oversized || value.abs() < 1e-6 {
        to_exponential(value)
    } else {
        value.to_string()
    }
}

fn to_exponential(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn to_exp_flag(params: &[Param]) -> bool {
    params.first().and_then(Param::as_bool).unwrap_or(false)
}
