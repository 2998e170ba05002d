//! One-shot command handlers. Each writes its report to `out`.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use productivity_core::charts::ChartSpec;
use productivity_core::{
    Calculation, CalculationInput, CalculationKind, Calculator, RetentionPolicy, Session,
};
use productivity_data::{export_to_file, load_from_file};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::render::{kinds_lines, metric_line, render_calculation};
use crate::utils::{ParseValueError, parse_assignment};

#[derive(Debug, Error, PartialEq)]
pub enum FieldArgError {
    #[error("{kind} has no input '{field}' (expected one of: {expected})")]
    UnknownField {
        kind: CalculationKind,
        field: String,
        expected: String,
    },

    #[error(transparent)]
    Value(#[from] ParseValueError),
}

/// Builds an input for `kind` from `field=value` arguments. Fields not
/// mentioned, or given an empty value, keep their defaults.
pub fn parse_field_args<S: AsRef<str>>(
    kind: CalculationKind,
    args: &[S],
) -> Result<CalculationInput, FieldArgError> {
    let mut values: HashMap<&'static str, f64> = HashMap::new();

    for arg in args.iter().map(AsRef::as_ref) {
        let (name, value) = parse_assignment(arg)?;
        let field = kind.field(name).ok_or_else(|| FieldArgError::UnknownField {
            kind,
            field: name.to_string(),
            expected: kind
                .fields()
                .iter()
                .map(|f| f.name)
                .collect::<Vec<_>>()
                .join(", "),
        })?;
        if let Some(value) = value {
            values.insert(field.name, value);
        }
    }

    Ok(CalculationInput::from_fields(kind, |f| {
        values.get(f.name).copied()
    }))
}

/// JSON shape printed by `calc --json`.
#[derive(Debug, Serialize)]
pub struct CalculationReport<'a> {
    pub label: &'static str,
    pub calculation: &'a Calculation,
    pub chart: ChartSpec,
}

pub fn run_calc<S: AsRef<str>>(
    kind: CalculationKind,
    args: &[S],
    json: bool,
    out: &mut impl Write,
) -> Result<Calculation> {
    let input = parse_field_args(kind, args)?;
    let calc = Calculator::calculate(&input)
        .with_context(|| format!("cannot calculate {}", kind.label()))?;

    if json {
        let report = CalculationReport {
            label: kind.label(),
            calculation: &calc,
            chart: ChartSpec::for_calculation(&calc),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}", render_calculation(&calc))?;
    }

    Ok(calc)
}

pub fn run_kinds(out: &mut impl Write) -> Result<()> {
    for line in kinds_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Counts from one `batch` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub calculated: usize,
    pub rejected: usize,
    pub exported: Option<usize>,
}

/// Calculates every row of the CSV at `file`.
///
/// Rows that fail validation are reported and skipped; the rest are recorded
/// in a fresh session (subject to `policy`) and optionally exported.
pub fn run_batch(
    file: &Path,
    export: Option<&Path>,
    policy: RetentionPolicy,
    out: &mut impl Write,
) -> Result<BatchSummary> {
    let inputs = load_from_file(file)
        .with_context(|| format!("cannot load batch inputs from '{}'", file.display()))?;

    let mut session = Session::new(policy);
    let mut summary = BatchSummary::default();

    for (idx, input) in inputs.iter().enumerate() {
        let row = idx + 1;
        match Calculator::calculate(input) {
            Ok(calc) => {
                writeln!(out, "row {row}: {}", metric_line(&calc))?;
                session.record(&calc);
                summary.calculated += 1;
            }
            Err(err) => {
                warn!(row, %err, "rejected batch row");
                writeln!(out, "row {row}: error: {err}")?;
                summary.rejected += 1;
            }
        }
    }

    if let Some(path) = export {
        let written = export_to_file(path, session.history().iter())
            .with_context(|| format!("cannot export history to '{}'", path.display()))?;
        writeln!(out, "exported {written} records to {}", path.display())?;
        summary.exported = Some(written);
    }

    info!(
        calculated = summary.calculated,
        rejected = summary.rejected,
        "batch complete"
    );
    Ok(summary)
}
