use thiserror::Error;

/// Error returned when a command-line value cannot be used as a number.
#[derive(Debug, Error, PartialEq)]
pub enum ParseValueError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("expected field=value, got '{0}'")]
    MissingEquals(String),
}

/// Normalizes numeric input: trims whitespace and removes commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into an optional `f64`.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Returns `None` for empty or whitespace-only input so the caller can fall
/// back to a default.
pub fn parse_optional_number(s: &str) -> Result<Option<f64>, ParseValueError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }
    normalized.parse().map(Some).map_err(|e| {
        tracing::debug!(input = %s, "invalid number: {}", e);
        ParseValueError::InvalidNumber(s.to_string())
    })
}

/// Splits `"field=value"` and parses the value. An empty value is `None`.
pub fn parse_assignment(s: &str) -> Result<(&str, Option<f64>), ParseValueError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| ParseValueError::MissingEquals(s.to_string()))?;
    Ok((name.trim(), parse_optional_number(value)?))
}
