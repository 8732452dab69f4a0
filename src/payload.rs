//! Decodes sensor reports. A report is a UTF-8 JSON document holding
//! a three-level nested array of numbers, one inner pair per sample;
//! the handler only consumes the first number of the first sample.

use serde_json::Value;
use std::str;
use thiserror::Error;

/// Failure to extract the first reading from a report.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("report is not valid UTF-8: {0}")]
    Encoding(#[from] str::Utf8Error),

    #[error("report is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected a non-empty array at depth {depth}, found {found}")]
    Shape { depth: usize, found: &'static str },

    #[error("expected a number as the first reading, found {found}")]
    NotANumber { found: &'static str },
}

/// Names a JSON value the way the decode errors report it.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(items) if items.is_empty() => "an empty array",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Steps down one level of the expected nesting.
fn first_element(value: &Value, depth: usize) -> Result<&Value, PayloadError> {
    value
        .as_array()
        .and_then(|items| items.first())
        .ok_or(PayloadError::Shape {
            depth,
            found: describe(value),
        })
}

/// Extracts the first reading of a report: element `[0][0][0]` of the
/// nested array payload.
pub fn first_reading(body: &[u8]) -> Result<f64, PayloadError> {
    let data: Value = serde_json::from_str(str::from_utf8(body)?)?;
    let samples = first_element(&data, 0)?;
    let sample = first_element(samples, 1)?;
    let reading = first_element(sample, 2)?;
    reading.as_f64().ok_or(PayloadError::NotANumber {
        found: describe(reading),
    })
}
