//! Running-balance recalculation.
//!
//! Balance is a prefix-sum over the `(date, id)`-ordered entries of a
//! period, so any insert, edit, or delete invalidates every balance after
//! the touched position. No partial patch is safe against an arbitrary edit
//! position, so the pass always recomputes the whole period; periods are
//! tens to low hundreds of rows.

use crate::ledger::CashBook;

pub struct BalanceService;

impl BalanceService {
    /// Recomputes every balance in `period`:
    /// `balance[0] = opening + inflow[0] - outflow[0]`, then
    /// `balance[i] = balance[i-1] + inflow[i] - outflow[i]`.
    ///
    /// Idempotent, and a no-op for empty periods. Because balances are
    /// derived from scratch each time, re-running the pass is also the
    /// recovery path after any failed persistence attempt.
    pub fn recalculate(book: &mut CashBook, period: &str) {
        let order = book.entry_indices_in(period);
        if order.is_empty() {
            return;
        }
        let mut running = book.opening_balance(period);
        for index in order {
            let entry = &mut book.entries[index];
            running += entry.inflow - entry.outflow;
            entry.balance = running;
        }
        book.touch();
    }

    /// Recomputes every period in the book. Used after restoring a file
    /// whose balances may be stale.
    pub fn recalculate_all(book: &mut CashBook) {
        for period in book.period_keys() {
            Self::recalculate(book, &period);
        }
    }
}
