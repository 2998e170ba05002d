//! Per-session context.
//!
//! A [`Session`] owns everything one interactive user accumulates: the
//! currently selected calculation kind and the calculation history. Front
//! ends create one per user session and pass it to whatever renders the
//! history, rather than keeping it in global state.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::calculations::Calculation;
use crate::history::{HistoryStore, RetentionPolicy};
use crate::models::{CalculationKind, CalculationRecord};

/// Result recorded by [`Session::add_sample`].
pub const SAMPLE_RESULT: f64 = 0.85;

#[derive(Debug, Clone)]
pub struct Session {
    started_at: DateTime<Utc>,
    selected: CalculationKind,
    history: HistoryStore,
}

impl Session {
    /// Starts a session with an empty history and `Total` selected.
    pub fn new(policy: RetentionPolicy) -> Self {
        let started_at = Utc::now();
        info!(%started_at, capacity = ?policy.capacity(), "session started");
        Self {
            started_at,
            selected: CalculationKind::default(),
            history: HistoryStore::new(policy),
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn selected(&self) -> CalculationKind {
        self.selected
    }

    pub fn select(
        &mut self,
        kind: CalculationKind,
    ) {
        self.selected = kind;
    }

    /// Records `calc` in the history, timestamped now.
    pub fn record(
        &mut self,
        calc: &Calculation,
    ) -> &CalculationRecord {
        self.history
            .append(CalculationRecord::new(Utc::now(), calc.kind, calc.result()))
    }

    /// Appends a placeholder record for the selected kind.
    pub fn add_sample(&mut self) -> &CalculationRecord {
        self.history
            .append(CalculationRecord::new(Utc::now(), self.selected, SAMPLE_RESULT))
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn recent(
        &self,
        n: usize,
    ) -> Vec<&CalculationRecord> {
        self.history.recent(n)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RetentionPolicy::default())
    }
}
