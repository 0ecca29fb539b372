use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Account, Entry, EntryId, EntryInput};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// A single-tenant cash book. Exclusively owns entry lifecycle; services
/// layer validation and recalculation on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashBook {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// User-set opening balance per period key. Periods are independent;
    /// nothing carries a closing balance forward automatically.
    #[serde(default)]
    pub opening_balances: BTreeMap<String, f64>,
    next_entry_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "CashBook::schema_version_default")]
    pub schema_version: u8,
}

impl CashBook {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            entries: Vec::new(),
            accounts: Vec::new(),
            opening_balances: BTreeMap::new(),
            next_entry_id: 1,
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Inserts a pre-validated entry and returns its fresh id. Balance is
    /// left at zero; the caller runs the recalculation pass.
    pub fn insert_entry(&mut self, period: &str, input: EntryInput) -> EntryId {
        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;
        self.entries.push(Entry::new(id, period, input));
        self.touch();
        id
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn remove_entry(&mut self, id: EntryId) -> Option<Entry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(position);
        self.touch();
        Some(removed)
    }

    /// Removes every entry of `period`, returning how many were dropped.
    /// Idempotent: an unknown or empty period removes nothing.
    pub fn clear_period(&mut self, period: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.period != period);
        let removed = before - self.entries.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Entries of `period` ordered by `(date, id)` ascending. Empty for
    /// unknown periods, never an error.
    pub fn entries_in(&self, period: &str) -> Vec<&Entry> {
        let mut selected: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.period == period)
            .collect();
        selected.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        selected
    }

    /// Indices into `entries` for `period`, in `(date, id)` order. Lets the
    /// recalculation pass write balances back without cloning.
    pub fn entry_indices_in(&self, period: &str) -> Vec<usize> {
        let mut selected: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.period == period)
            .map(|(index, _)| index)
            .collect();
        selected.sort_by(|&a, &b| self.entries[a].cmp_order(&self.entries[b]));
        selected
    }

    pub fn period_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.period.clone()).collect();
        keys.sort();
        keys.dedup();
        keys
    }

    pub fn opening_balance(&self, period: &str) -> f64 {
        self.opening_balances.get(period).copied().unwrap_or(0.0)
    }

    pub fn set_opening_balance(&mut self, period: impl Into<String>, amount: f64) {
        self.opening_balances.insert(period.into(), amount);
        self.touch();
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.name.eq_ignore_ascii_case(name))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn ids_are_sequential_and_never_reused() {
        let mut book = CashBook::new("Shop");
        let first = book.insert_entry("May", EntryInput::inflow(date(1), "one", 1.0));
        let second = book.insert_entry("May", EntryInput::inflow(date(1), "two", 1.0));
        assert!(second > first);
        book.remove_entry(second).unwrap();
        let third = book.insert_entry("May", EntryInput::inflow(date(2), "three", 1.0));
        assert!(third > second, "removed ids must not come back");
    }

    #[test]
    fn entries_in_orders_by_date_then_id() {
        let mut book = CashBook::new("Shop");
        book.insert_entry("May", EntryInput::inflow(date(9), "late", 1.0));
        book.insert_entry("May", EntryInput::inflow(date(2), "early", 1.0));
        book.insert_entry("May", EntryInput::inflow(date(2), "early-second", 1.0));
        book.insert_entry("June", EntryInput::inflow(date(1), "other period", 1.0));
        let listed = book.entries_in("May");
        let descriptions: Vec<&str> = listed.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["early", "early-second", "late"]);
    }

    #[test]
    fn clear_period_is_idempotent() {
        let mut book = CashBook::new("Shop");
        book.insert_entry("May", EntryInput::inflow(date(1), "a", 1.0));
        assert_eq!(book.clear_period("May"), 1);
        assert_eq!(book.clear_period("May"), 0);
        assert!(book.entries_in("May").is_empty());
    }

    #[test]
    fn opening_balance_defaults_to_zero() {
        let mut book = CashBook::new("Shop");
        assert_eq!(book.opening_balance("January"), 0.0);
        book.set_opening_balance("January", 250.0);
        assert_eq!(book.opening_balance("January"), 250.0);
    }

    #[test]
    fn serde_roundtrip_preserves_next_id() {
        let mut book = CashBook::new("Shop");
        book.insert_entry("May", EntryInput::inflow(date(1), "a", 1.0));
        let json = serde_json::to_string(&book).unwrap();
        let mut restored: CashBook = serde_json::from_str(&json).unwrap();
        let id = restored.insert_entry("May", EntryInput::inflow(date(2), "b", 1.0));
        assert_eq!(id, EntryId(2));
    }
}
