//! Session-scoped calculation history.
//!
//! A [`HistoryStore`] is an ordered, append-only log of
//! [`CalculationRecord`]s. Records are never edited. Whether old records are
//! ever dropped is decided up front by a [`RetentionPolicy`]:
//!
//! | Policy | Behaviour |
//! |--------|-----------|
//! | `Unbounded` | keeps every record for the life of the store |
//! | `KeepLast(n)` | keeps the newest `n`, evicting the oldest first |

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::CalculationRecord;

/// Number of records shown in the "recent calculations" panel.
pub const DEFAULT_RECENT: usize = 5;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    #[default]
    Unbounded,
    KeepLast(NonZeroUsize),
}

impl RetentionPolicy {
    /// A ring-buffer policy holding at most `capacity` records.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::ZeroCapacity`] if `capacity` is zero.
    pub fn keep_last(capacity: usize) -> Result<Self, HistoryError> {
        NonZeroUsize::new(capacity)
            .map(Self::KeepLast)
            .ok_or(HistoryError::ZeroCapacity)
    }

    /// `None` keeps everything, `Some(n)` keeps the newest `n`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::ZeroCapacity`] for `Some(0)`.
    pub fn from_capacity(capacity: Option<usize>) -> Result<Self, HistoryError> {
        match capacity {
            None => Ok(Self::Unbounded),
            Some(n) => Self::keep_last(n),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::KeepLast(n) => Some(n.get()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: VecDeque<CalculationRecord>,
    policy: RetentionPolicy,
}

impl HistoryStore {
    /// Creates an empty store with the given retention policy.
    pub fn new(policy: RetentionPolicy) -> Self {
        let records = match policy {
            RetentionPolicy::Unbounded => VecDeque::new(),
            RetentionPolicy::KeepLast(n) => VecDeque::with_capacity(n.get()),
        };
        Self { records, policy }
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    /// Appends `record` to the end of the history and returns it.
    ///
    /// Under [`RetentionPolicy::KeepLast`] a full store first evicts its
    /// oldest record.
    pub fn append(
        &mut self,
        record: CalculationRecord,
    ) -> &CalculationRecord {
        if let RetentionPolicy::KeepLast(n) = self.policy {
            while self.records.len() >= n.get() {
                if let Some(evicted) = self.records.pop_front() {
                    debug!(
                        kind = evicted.calculation_type().as_str(),
                        "history full, evicted oldest record"
                    );
                }
            }
        }
        let index = self.records.len();
        self.records.push_back(record);
        &self.records[index]
    }

    /// The last `min(n, len)` records, oldest first.
    pub fn recent(
        &self,
        n: usize,
    ) -> Vec<&CalculationRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).collect()
    }

    /// All retained records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
