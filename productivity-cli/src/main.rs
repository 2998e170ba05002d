use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use productivity_cli::config::AppConfig;
use productivity_cli::session_repl::{Repl, ReplSettings};
use productivity_cli::{commands, logging};
use productivity_core::{CalculationKind, Session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Productivity ratios and Economic Order Quantity calculator.
#[derive(Debug, Parser)]
#[command(name = "prodcalc", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `productivity_core=trace`. `RUST_LOG` wins.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one calculation and print the result, chart summary and tip.
    Calc {
        /// Kind code: total, labour, material, capital, machine, misc,
        /// multifactor, tfp or eoq.
        kind: CalculationKind,

        /// Print the calculation and chart as JSON.
        #[arg(long)]
        json: bool,

        /// Inputs as `field=value`; unset or empty fields use defaults.
        #[arg(value_name = "FIELD=VALUE")]
        fields: Vec<String>,
    },

    /// List calculation kinds with their inputs and defaults.
    Kinds,

    /// Calculate every row of a CSV file.
    Batch {
        /// CSV with a `kind` column and one column per input field.
        #[arg(long)]
        file: PathBuf,

        /// Write the resulting history to this CSV file.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Interactive session over stdin.
    Session,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("cannot load configuration")?
        .with_overrides(cli.log_level, cli.log_file);
    logging::init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    let policy = config.retention_policy()?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Calc { kind, json, fields } => {
            commands::run_calc(kind, &fields, json, &mut stdout)?;
        }
        Command::Kinds => commands::run_kinds(&mut stdout)?,
        Command::Batch { file, export } => {
            commands::run_batch(&file, export.as_deref(), policy, &mut stdout)?;
        }
        Command::Session => {
            let settings = ReplSettings {
                recent: config.history.recent,
                record_calculations: config.session.record_calculations,
            };
            let mut repl = Repl::new(Session::new(policy), settings);
            repl.run(io::stdin().lock(), &mut stdout)?;
        }
    }

    Ok(())
}
