//! Domain model for ledger entries.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Book-scoped entry identifier, assigned sequentially and never reused.
///
/// Sequential ids make `(date, id)` ordering equal creation order for
/// entries sharing a date, which the running-balance walk depends on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One dated cash movement within a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub period: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub inflow: f64,
    pub outflow: f64,
    /// Running balance, derived. Owned by the recalculation pass and never
    /// settable by callers.
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(id: EntryId, period: impl Into<String>, input: EntryInput) -> Self {
        Self {
            id,
            period: period.into(),
            date: input.date,
            description: input.description,
            note: input.note,
            inflow: input.inflow,
            outflow: input.outflow,
            balance: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Net cash movement of this entry.
    pub fn net(&self) -> f64 {
        self.inflow - self.outflow
    }

    /// Applies an edit, leaving `id`, `period`, and `created_at` untouched.
    pub fn apply(&mut self, input: EntryInput) {
        self.date = input.date;
        self.description = input.description;
        self.note = input.note;
        self.inflow = input.inflow;
        self.outflow = input.outflow;
    }

    /// Ordering key used everywhere a period is walked.
    pub fn sort_key(&self) -> (NaiveDate, EntryId) {
        (self.date, self.id)
    }

    pub fn cmp_order(&self, other: &Entry) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Caller-settable fields of an entry, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub date: NaiveDate,
    pub description: String,
    pub note: Option<String>,
    pub inflow: f64,
    pub outflow: f64,
}

impl EntryInput {
    pub fn inflow(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            note: None,
            inflow: amount,
            outflow: 0.0,
        }
    }

    pub fn outflow(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            note: None,
            inflow: 0.0,
            outflow: amount,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
