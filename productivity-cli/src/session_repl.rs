//! Line-oriented interactive session.
//!
//! The REPL owns one [`Session`]; its history lives until `quit` or end of
//! input.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use productivity_core::format::format_record;
use productivity_core::{CalculationKind, Calculator, Session};
use productivity_data::export_to_file;
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::parse_field_args;
use crate::logging;
use crate::render::{history_lines, kinds_lines, recent_lines, render_calculation};

pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Commands:
  select <kind>            choose the calculation kind (see `kinds`)
  calc [field=value ...]   calculate the selected kind; unset fields use defaults
  sample                   add a sample record (0.85) for the selected kind
  recent [n]               show the last n calculations
  history                  show every calculation with timestamps
  export <path>            write the history as CSV
  kinds                    list kinds, codes and defaults
  log <level>              change the log filter
  help                     show this help
  quit                     leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Select(CalculationKind),
    Calc(Vec<String>),
    Sample,
    Recent(Option<usize>),
    History,
    Export(PathBuf),
    Kinds,
    Log(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Kind(#[from] productivity_core::ParseKindError),

    #[error("invalid count '{0}'")]
    InvalidCount(String),
}

impl ReplCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "select" => match rest.as_slice() {
                [code] => Self::Select(code.parse()?),
                _ => return Err(CommandError::Usage("select <kind>")),
            },
            "calc" => Self::Calc(rest.iter().map(|s| s.to_string()).collect()),
            "sample" => Self::Sample,
            "recent" => match rest.as_slice() {
                [] => Self::Recent(None),
                [n] => match n.parse::<usize>() {
                    Ok(count) if count > 0 => Self::Recent(Some(count)),
                    _ => return Err(CommandError::InvalidCount(n.to_string())),
                },
                _ => return Err(CommandError::Usage("recent [n]")),
            },
            "history" => Self::History,
            "export" => match rest.as_slice() {
                [path] => Self::Export(PathBuf::from(path)),
                _ => return Err(CommandError::Usage("export <path>")),
            },
            "kinds" => Self::Kinds,
            "log" => match rest.as_slice() {
                [level] => Self::Log(level.to_string()),
                _ => return Err(CommandError::Usage("log <level>")),
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        Ok(Some(command))
    }
}

/// REPL behaviour taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplSettings {
    pub recent: usize,
    pub record_calculations: bool,
}

pub struct Repl {
    session: Session,
    settings: ReplSettings,
}

impl Repl {
    pub fn new(
        session: Session,
        settings: ReplSettings,
    ) -> Self {
        Self { session, settings }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// Command failures are reported on `out` and the loop continues; only
    /// I/O errors on `input` or `out` end the session early.
    pub fn run<R, W>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "Productivity calculator. Type 'help' for commands.")?;
        writeln!(out, "Selected: {}", self.session.selected().label())?;

        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line.context("cannot read session input")?;

            let command = match ReplCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            };
            debug!(?command, "session command");

            if command == ReplCommand::Quit {
                break;
            }
            if let Err(err) = self.execute(command, out) {
                writeln!(out, "error: {err:#}")?;
            }
        }

        info!(records = self.session.history().len(), "session ended");
        Ok(())
    }

    fn execute<W: Write>(
        &mut self,
        command: ReplCommand,
        out: &mut W,
    ) -> Result<()> {
        match command {
            ReplCommand::Select(kind) => {
                self.session.select(kind);
                writeln!(out, "Selected: {}", kind.label())?;
            }
            ReplCommand::Calc(args) => {
                let kind = self.session.selected();
                let input = parse_field_args(kind, &args)?;
                let calc = Calculator::calculate(&input)?;
                writeln!(out, "{}", render_calculation(&calc))?;
                if self.settings.record_calculations {
                    self.session.record(&calc);
                }
            }
            ReplCommand::Sample => {
                let record = self.session.add_sample();
                writeln!(out, "Added sample: {}", format_record(record))?;
            }
            ReplCommand::Recent(count) => {
                let count = count.unwrap_or(self.settings.recent);
                for line in recent_lines(self.session.recent(count)) {
                    writeln!(out, "{line}")?;
                }
            }
            ReplCommand::History => {
                if self.session.history().is_empty() {
                    writeln!(out, "No calculations yet.")?;
                }
                for line in history_lines(self.session.history().iter()) {
                    writeln!(out, "{line}")?;
                }
            }
            ReplCommand::Export(path) => {
                let written = export_to_file(&path, self.session.history().iter())
                    .with_context(|| format!("cannot export to '{}'", path.display()))?;
                writeln!(out, "Exported {written} records to {}", path.display())?;
            }
            ReplCommand::Kinds => {
                for line in kinds_lines() {
                    writeln!(out, "{line}")?;
                }
            }
            ReplCommand::Log(level) => {
                logging::set_log_level(&level)?;
                writeln!(out, "Log level set to {level}")?;
            }
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(ReplCommand::parse("   "), Ok(None));
    }

    #[test]
    fn select_parses_kind_code() {
        assert_eq!(
            ReplCommand::parse("select EOQ"),
            Ok(Some(ReplCommand::Select(CalculationKind::EconomicOrderQuantity)))
        );
    }

    #[test]
    fn select_requires_one_argument() {
        assert_eq!(
            ReplCommand::parse("select"),
            Err(CommandError::Usage("select <kind>"))
        );
    }

    #[test]
    fn recent_accepts_optional_positive_count() {
        assert_eq!(ReplCommand::parse("recent"), Ok(Some(ReplCommand::Recent(None))));
        assert_eq!(
            ReplCommand::parse("recent 3"),
            Ok(Some(ReplCommand::Recent(Some(3))))
        );
        assert_eq!(
            ReplCommand::parse("recent 0"),
            Err(CommandError::InvalidCount("0".to_string()))
        );
    }

    #[test]
    fn calc_keeps_assignments() {
        assert_eq!(
            ReplCommand::parse("calc output=5 labour_input=1"),
            Ok(Some(ReplCommand::Calc(vec![
                "output=5".to_string(),
                "labour_input=1".to_string(),
            ])))
        );
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            ReplCommand::parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
