//! Batch pipeline against on-disk fixtures: load inputs, calculate, export,
//! read the export back.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use productivity_core::format::format_calculation;
use productivity_core::{CalculationInput, CalculationKind, Calculator, Ratio, Session};
use productivity_data::{export_to_file, load_from_file, read_records};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("batch_inputs.csv")
}

fn temp_export_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("productivity-data-{}-{name}", std::process::id()))
}

#[test]
fn fixture_loads_every_row() {
    let inputs = load_from_file(&fixture_path()).expect("fixture should load");

    let kinds: Vec<_> = inputs.iter().map(CalculationInput::kind).collect();
    assert_eq!(
        kinds,
        vec![
            CalculationKind::Total,
            CalculationKind::Labour,
            CalculationKind::Machine,
            CalculationKind::TotalFactor,
            CalculationKind::EconomicOrderQuantity,
            CalculationKind::EconomicOrderQuantity,
        ]
    );
    assert_eq!(
        inputs[1],
        CalculationInput::Labour {
            output: 1200.0,
            labour_input: 300.0,
        }
    );
    assert_eq!(inputs[2], CalculationInput::defaults(CalculationKind::Machine));
}

#[test]
fn fixture_results_match_expected_values() {
    let inputs = load_from_file(&fixture_path()).unwrap();

    let results: Vec<_> = inputs
        .iter()
        .map(|input| format_calculation(&Calculator::calculate(input).unwrap()))
        .collect();

    assert_eq!(
        results,
        vec![
            "125.00%",
            "400.00%",
            "666.67%",
            "0.00% (undefined: zero denominator)",
            "223.61 units",
            "0.00 units (undefined: zero denominator)",
        ]
    );
}

#[test]
fn exported_history_reads_back_identically() {
    let inputs = load_from_file(&fixture_path()).unwrap();
    let mut session = Session::default();
    for input in &inputs {
        let calc = Calculator::calculate(input).unwrap();
        session.record(&calc);
    }
    let path = temp_export_path("history.csv");

    let written = export_to_file(&path, session.history().iter()).unwrap();
    let file = std::fs::File::open(&path).unwrap();
    let restored = read_records(file).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(written, inputs.len());
    let original: Vec<_> = session.history().iter().cloned().collect();
    assert_eq!(restored, original);
}

#[test]
fn undefined_results_export_as_zero() {
    let calc = Calculator::calculate(&CalculationInput::EconomicOrderQuantity {
        demand: 1000.0,
        ordering_cost: 50.0,
        holding_cost: 0.0,
    })
    .unwrap();
    assert_eq!(calc.value, Ratio::Undefined);
    let mut session = Session::default();
    session.record(&calc);
    let path = temp_export_path("undefined.csv");

    export_to_file(&path, session.history().iter()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(text.ends_with(",eoq,0.0\n"), "unexpected export: {text}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_from_file(Path::new("does/not/exist.csv")).unwrap_err();

    assert!(matches!(err, productivity_data::InputLoadError::Io(_)));
}
