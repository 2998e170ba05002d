use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::calculation_kind::CalculationKind;

/// An immutable snapshot of one user-triggered calculation.
///
/// Fields are private so a record cannot change after it has been appended
/// to a session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    timestamp: DateTime<Utc>,
    calculation_type: CalculationKind,
    result: f64,
}

impl CalculationRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        calculation_type: CalculationKind,
        result: f64,
    ) -> Self {
        Self {
            timestamp,
            calculation_type,
            result,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn calculation_type(&self) -> CalculationKind {
        self.calculation_type
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}
