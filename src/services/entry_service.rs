//! Validated CRUD over cash book entries.
//!
//! Every mutation that changes ordering or values re-runs the balance pass
//! for the owning period before returning, so callers never observe stale
//! balances. Validation happens before any state changes; a rejected input
//! leaves the book untouched.

use crate::domain::{Entry, EntryId, EntryInput};
use crate::errors::{LedgerError, Result};
use crate::ledger::CashBook;
use crate::services::BalanceService;

pub struct EntryService;

impl EntryService {
    /// Adds a new entry to `period` and returns its identifier.
    pub fn add(book: &mut CashBook, period: &str, input: EntryInput) -> Result<EntryId> {
        Self::validate(&input)?;
        let id = book.insert_entry(period, input);
        BalanceService::recalculate(book, period);
        tracing::debug!(%id, period, "entry added");
        Ok(id)
    }

    /// Edits every caller-settable field of the entry identified by `id`.
    /// The id, owning period, and creation timestamp are immutable.
    pub fn edit(book: &mut CashBook, id: EntryId, input: EntryInput) -> Result<()> {
        Self::validate(&input)?;
        let entry = book.entry_mut(id).ok_or(LedgerError::EntryNotFound(id))?;
        let period = entry.period.clone();
        entry.apply(input);
        book.touch();
        BalanceService::recalculate(book, &period);
        Ok(())
    }

    /// Removes an entry, returning the removed instance.
    pub fn remove(book: &mut CashBook, id: EntryId) -> Result<Entry> {
        let removed = book.remove_entry(id).ok_or(LedgerError::EntryNotFound(id))?;
        BalanceService::recalculate(book, &removed.period);
        Ok(removed)
    }

    /// Drops every entry of `period`. Nothing remains, so no recalculation
    /// is needed. Returns how many entries were removed; zero for an empty
    /// or unknown period.
    pub fn clear_period(book: &mut CashBook, period: &str) -> usize {
        let removed = book.clear_period(period);
        if removed > 0 {
            tracing::debug!(period, removed, "period cleared");
        }
        removed
    }

    /// Entries of `period` in `(date, id)` order.
    pub fn list<'a>(book: &'a CashBook, period: &str) -> Vec<&'a Entry> {
        book.entries_in(period)
    }

    /// Records the user-supplied opening balance for a period and refreshes
    /// its balances. Periods stay independent: the closing balance of one is
    /// never carried into the next automatically.
    pub fn set_opening_balance(book: &mut CashBook, period: &str, amount: f64) -> Result<()> {
        if !amount.is_finite() {
            return Err(LedgerError::Validation(
                "opening balance must be a finite amount".into(),
            ));
        }
        book.set_opening_balance(period, amount);
        BalanceService::recalculate(book, period);
        Ok(())
    }

    fn validate(input: &EntryInput) -> Result<()> {
        if input.description.trim().is_empty() {
            return Err(LedgerError::Validation("description must not be empty".into()));
        }
        if !input.inflow.is_finite() || !input.outflow.is_finite() {
            return Err(LedgerError::Validation("amounts must be finite".into()));
        }
        if input.inflow < 0.0 {
            return Err(LedgerError::Validation("inflow must not be negative".into()));
        }
        if input.outflow < 0.0 {
            return Err(LedgerError::Validation("outflow must not be negative".into()));
        }
        // No workflow produces an entry carrying both sides.
        if input.inflow > 0.0 && input.outflow > 0.0 {
            return Err(LedgerError::Validation(
                "an entry carries either an inflow or an outflow, not both".into(),
            ));
        }
        Ok(())
    }
}
