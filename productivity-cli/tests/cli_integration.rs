//! End-to-end runs of the command handlers and the session REPL against
//! fixture files and in-memory I/O.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use productivity_cli::commands::{BatchSummary, run_batch};
use productivity_cli::config::AppConfig;
use productivity_cli::session_repl::{Repl, ReplSettings};
use productivity_core::{CalculationKind, RetentionPolicy, Session};
use productivity_data::read_records;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("prodcalc-{}-{name}", std::process::id()))
}

fn run_repl(
    settings: ReplSettings,
    policy: RetentionPolicy,
    script: &str,
) -> (Repl, String) {
    let mut repl = Repl::new(Session::new(policy), settings);
    let mut out = Vec::new();
    repl.run(script.as_bytes(), &mut out).unwrap();
    (repl, String::from_utf8(out).unwrap())
}

const DEFAULT_SETTINGS: ReplSettings = ReplSettings {
    recent: 5,
    record_calculations: true,
};

// =============================================================================
// config tests
// =============================================================================

#[test]
fn fixture_config_loads() {
    let config = AppConfig::load(Some(&fixture("config.toml"))).unwrap();

    assert_eq!(config.history.capacity, Some(3));
    assert_eq!(config.history.recent, 2);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.retention_policy().unwrap().capacity(), Some(3));
}

// =============================================================================
// batch tests
// =============================================================================

#[test]
fn batch_reports_each_row_and_skips_rejected() {
    let mut out = Vec::new();

    let summary = run_batch(
        &fixture("batch.csv"),
        None,
        RetentionPolicy::Unbounded,
        &mut out,
    )
    .unwrap();

    assert_eq!(
        summary,
        BatchSummary {
            calculated: 3,
            rejected: 1,
            exported: None,
        }
    );
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "row 1: Labour Productivity: 400.00%");
    assert_eq!(
        lines[1],
        "row 2: error: capital_input must not be negative, got -250"
    );
    assert_eq!(lines[2], "row 3: Economic Order Quantity (EOQ): 346.41 units");
    assert_eq!(lines[3], "row 4: Total Productivity: 125.00%");
}

#[test]
fn batch_export_writes_calculated_rows() {
    let export = temp_path("batch-export.csv");
    let mut out = Vec::new();

    let summary = run_batch(
        &fixture("batch.csv"),
        Some(&export),
        RetentionPolicy::Unbounded,
        &mut out,
    )
    .unwrap();
    let records = read_records(std::fs::File::open(&export).unwrap()).unwrap();
    std::fs::remove_file(&export).ok();

    assert_eq!(summary.exported, Some(3));
    let kinds: Vec<_> = records.iter().map(|r| r.calculation_type()).collect();
    assert_eq!(
        kinds,
        vec![
            CalculationKind::Labour,
            CalculationKind::EconomicOrderQuantity,
            CalculationKind::Total,
        ]
    );
    assert_eq!(records[0].result(), 4.0);
}

#[test]
fn batch_with_missing_file_fails_with_context() {
    let mut out = Vec::new();

    let err = run_batch(
        Path::new("no/such/batch.csv"),
        None,
        RetentionPolicy::Unbounded,
        &mut out,
    )
    .unwrap_err();

    assert!(err.to_string().starts_with("cannot load batch inputs from"));
}

// =============================================================================
// session tests
// =============================================================================

#[test]
fn session_calculates_records_and_shows_recent() {
    let (repl, out) = run_repl(
        DEFAULT_SETTINGS,
        RetentionPolicy::Unbounded,
        "select labour\ncalc output=600 labour_input=200\nsample\nrecent\nquit\n",
    );

    assert!(out.contains("Selected: Labour Productivity"));
    assert!(out.contains("Labour Productivity: 300.00%"));
    assert!(out.contains("Added sample: Labour Productivity: 85.00%"));
    assert!(out.contains(
        "Recent calculations:\n  Labour Productivity: 300.00%\n  Labour Productivity: 85.00%\n"
    ));
    assert_eq!(repl.session().history().len(), 2);
}

#[test]
fn session_recent_defaults_to_configured_count() {
    let settings = ReplSettings {
        recent: 1,
        record_calculations: true,
    };

    let (_, out) = run_repl(
        settings,
        RetentionPolicy::Unbounded,
        "calc\nselect eoq\ncalc\nrecent\n",
    );

    assert!(out.contains("Recent calculations:\n  Economic Order Quantity (EOQ): 223.61 units\n> "));
}

#[test]
fn session_retention_keeps_newest_records() {
    let policy = RetentionPolicy::keep_last(2).unwrap();

    let (repl, _) = run_repl(DEFAULT_SETTINGS, policy, "sample\nselect tfp\nsample\nsample\n");

    let kinds: Vec<_> = repl
        .session()
        .history()
        .iter()
        .map(|r| r.calculation_type())
        .collect();
    assert_eq!(
        kinds,
        vec![CalculationKind::TotalFactor, CalculationKind::TotalFactor]
    );
}

#[test]
fn session_without_recording_leaves_history_empty() {
    let settings = ReplSettings {
        recent: 5,
        record_calculations: false,
    };

    let (repl, out) = run_repl(settings, RetentionPolicy::Unbounded, "calc\nhistory\n");

    assert!(out.contains("Total Productivity: 125.00%"));
    assert!(out.contains("No calculations yet."));
    assert!(repl.session().history().is_empty());
}

#[test]
fn session_errors_do_not_end_the_loop() {
    let (repl, out) = run_repl(
        DEFAULT_SETTINGS,
        RetentionPolicy::Unbounded,
        "select velocity\ncalc output=-1\ncalc demand=3\nfly\nsample\n",
    );

    assert!(out.contains("error: unknown calculation kind 'velocity'"));
    assert!(out.contains("error: output must not be negative, got -1"));
    assert!(out.contains("error: Total Productivity has no input 'demand'"));
    assert!(out.contains("error: unknown command 'fly'"));
    assert_eq!(repl.session().history().len(), 1);
}

#[test]
fn session_export_writes_history_csv() {
    let export = temp_path("session-export.csv");
    let script = format!("sample\nselect capital\ncalc\nexport {}\n", export.display());

    let (_, out) = run_repl(DEFAULT_SETTINGS, RetentionPolicy::Unbounded, &script);
    let text = std::fs::read_to_string(&export).unwrap();
    std::fs::remove_file(&export).ok();

    assert!(out.contains("Exported 2 records to"));
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "timestamp,calculation_type,result");
    assert!(lines[1].ends_with(",total,0.85"));
    assert!(lines[2].ends_with(",capital,4.0"));
}

#[test]
fn session_ends_at_end_of_input() {
    let (repl, out) = run_repl(DEFAULT_SETTINGS, RetentionPolicy::Unbounded, "help\n");

    assert!(out.contains("select <kind>"));
    assert!(out.ends_with("> \n"));
    assert!(repl.session().history().is_empty());
}
