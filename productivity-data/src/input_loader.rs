//! CSV loader for batch calculation inputs.
//!
//! ## CSV Format
//!
//! The first row is a header. Column order does **not** matter; headers are
//! matched by name and are case-sensitive.
//!
//! | Column | Required | Notes |
//! |--------|----------|-------|
//! | `kind` | yes | One of: `total`, `labour`, `material`, `capital`, `machine`, `misc`, `multifactor`, `tfp`, `eoq` |
//! | any input field name | no | e.g. `output`, `labour_input`, `demand` |
//!
//! Recognised input columns: `output`, `total_input`, `labour_input`,
//! `material_input`, `capital_input`, `machine_input`, `misc_input`,
//! `human_input`, `energy_input`, `net_output`, `worker_input`, `demand`,
//! `ordering_cost`, `holding_cost`.
//!
//! A row only reads the columns its kind uses. An empty or absent cell
//! takes the field's default value. Numbers may use `,` as a thousands
//! separator.
//!
//! ### Example
//!
//! ```csv
//! kind,output,labour_input,demand,ordering_cost,holding_cost
//! labour,1200,300,,,
//! eoq,,,2400,75,3
//! total,,,,,
//! ```
//!
//! Values are not range-checked here; run each input through
//! [`Calculator`](productivity_core::Calculator) to validate.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use productivity_core::{CalculationInput, CalculationKind};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the column holding the calculation kind code.
pub const KIND_COLUMN: &str = "kind";

/// Errors that can occur while loading batch input CSV data.
#[derive(Debug, Error)]
pub enum InputLoadError {
    #[error("cannot read input file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure itself was invalid (ragged rows, bad encoding...).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("missing required column 'kind'")]
    MissingKindColumn,

    #[error("unrecognised column '{0}'")]
    UnknownColumn(String),

    /// `row` is 1-based, counting the first data row as 1.
    #[error("unrecognised calculation kind '{kind}' on row {row}")]
    UnknownKind { kind: String, row: usize },

    #[error("invalid number '{value}' for {field} on row {row}")]
    InvalidValue {
        field: &'static str,
        row: usize,
        value: String,
    },
}

/// Every input field name used by any calculation kind.
fn known_fields() -> HashSet<&'static str> {
    CalculationKind::ALL
        .iter()
        .flat_map(|kind| kind.fields().iter().map(|f| f.name))
        .collect()
}

fn check_headers(headers: &csv::StringRecord) -> Result<(), InputLoadError> {
    let known = known_fields();
    let mut has_kind = false;

    for header in headers {
        if header == KIND_COLUMN {
            has_kind = true;
        } else if !known.contains(header) {
            return Err(InputLoadError::UnknownColumn(header.to_string()));
        }
    }

    if has_kind {
        Ok(())
    } else {
        Err(InputLoadError::MissingKindColumn)
    }
}

/// Trims whitespace and removes `,` thousands separators.
fn normalize_number(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Converts one CSV row into a [`CalculationInput`].
///
/// `row_number` is 1-based (for error messages).
fn convert_row(
    row: &HashMap<String, String>,
    row_number: usize,
) -> Result<CalculationInput, InputLoadError> {
    let code = row.get(KIND_COLUMN).map(String::as_str).unwrap_or_default();
    let kind = CalculationKind::parse(code).ok_or_else(|| InputLoadError::UnknownKind {
        kind: code.to_string(),
        row: row_number,
    })?;

    let mut values = HashMap::new();
    for field in kind.fields() {
        let Some(raw) = row.get(field.name) else {
            continue;
        };
        let normalized = normalize_number(raw);
        if normalized.is_empty() {
            continue;
        }
        let value: f64 = normalized
            .parse()
            .map_err(|_| InputLoadError::InvalidValue {
                field: field.name,
                row: row_number,
                value: raw.clone(),
            })?;
        values.insert(field.name, value);
    }

    Ok(CalculationInput::from_fields(kind, |f| {
        values.get(f.name).copied()
    }))
}

/// Parses every row of `reader` into a calculation input.
///
/// # Errors
///
/// Returns the first [`InputLoadError`] encountered; no partial result is
/// returned.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<CalculationInput>, InputLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    check_headers(csv_reader.headers()?)?;

    let mut inputs = Vec::new();
    for (idx, result) in csv_reader.deserialize::<HashMap<String, String>>().enumerate() {
        let row = result?;
        let input = convert_row(&row, idx + 1)?;
        debug!(row = idx + 1, kind = input.kind().as_str(), "parsed input row");
        inputs.push(input);
    }

    Ok(inputs)
}

/// Parses a CSV string. Convenience wrapper over [`load_from_reader`].
pub fn load_from_str(csv: &str) -> Result<Vec<CalculationInput>, InputLoadError> {
    load_from_reader(csv.as_bytes())
}

/// Opens `path` and parses it as batch input CSV.
pub fn load_from_file(path: &Path) -> Result<Vec<CalculationInput>, InputLoadError> {
    let file = File::open(path)?;
    let inputs = load_from_reader(file)?;
    info!(path = %path.display(), rows = inputs.len(), "loaded batch inputs");
    Ok(inputs)
}
