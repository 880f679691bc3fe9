//! Field-level coercion and validation shared by every record kind

use super::errors::RecordError;

/// Separator between fields of an encoded record line
pub const DELIMITER: char = '_';

/// Validates a free-text field that is written between delimiters.
///
/// The encoding has no escaping, so the delimiter and line breaks are rejected.
pub(crate) fn text(field: &'static str, value: impl Into<String>) -> Result<String, RecordError> {
    let value = value.into();
    if value.contains(DELIMITER) {
        return Err(RecordError::constraint(
            field,
            format!("must not contain the delimiter '{DELIMITER}'"),
        ));
    }
    single_line(field, value)
}

/// Validates a field that occupies a whole line on its own.
pub(crate) fn single_line(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, RecordError> {
    let value = value.into();
    if value.contains(['\n', '\r']) {
        return Err(RecordError::constraint(field, "must not contain line breaks"));
    }
    Ok(value)
}

/// Parses an integer field, tolerating surrounding whitespace.
pub(crate) fn integer(field: &'static str, raw: &str) -> Result<i64, RecordError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidField {
            field,
            value: raw.to_string(),
        })
}

/// Parses a decimal field, tolerating surrounding whitespace.
pub(crate) fn decimal(field: &'static str, raw: &str) -> Result<f64, RecordError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RecordError::InvalidField {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Narrows an integer to `u32`, requiring it to be strictly positive.
pub(crate) fn positive(field: &'static str, value: i64) -> Result<u32, RecordError> {
    if value <= 0 {
        return Err(RecordError::constraint(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    fits_u32(field, value)
}

/// Narrows an integer to `u32`, requiring it to be zero or more.
pub(crate) fn non_negative(field: &'static str, value: i64) -> Result<u32, RecordError> {
    if value < 0 {
        return Err(RecordError::constraint(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    fits_u32(field, value)
}

fn fits_u32(field: &'static str, value: i64) -> Result<u32, RecordError> {
    u32::try_from(value)
        .map_err(|_| RecordError::constraint(field, format!("is out of range, got {value}")))
}
