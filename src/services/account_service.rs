//! Chart-of-accounts management.

use uuid::Uuid;

use crate::domain::{Account, AccountKind};
use crate::errors::{LedgerError, Result};
use crate::ledger::CashBook;

pub struct AccountService;

impl AccountService {
    /// Adds an account label; names are unique (case-insensitive).
    pub fn add(book: &mut CashBook, name: &str, kind: AccountKind) -> Result<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation("account name must not be empty".into()));
        }
        if book.account_by_name(name).is_some() {
            return Err(LedgerError::Validation(format!(
                "account `{name}` already exists"
            )));
        }
        Ok(book.add_account(Account::new(name, kind)))
    }

    /// Seeds the default chart, but only into an empty chart.
    pub fn seed_defaults(book: &mut CashBook) -> usize {
        if !book.accounts.is_empty() {
            return 0;
        }
        let chart = Account::default_chart();
        let seeded = chart.len();
        for account in chart {
            book.add_account(account);
        }
        seeded
    }

    /// All accounts ordered by `(kind, name)`.
    pub fn list(book: &CashBook) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = book.accounts.iter().collect();
        accounts.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate_names() {
        let mut book = CashBook::new("Shop");
        AccountService::add(&mut book, "Rent", AccountKind::Expense).unwrap();
        let err = AccountService::add(&mut book, "rent", AccountKind::Expense).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn seed_defaults_only_fills_an_empty_chart() {
        let mut book = CashBook::new("Shop");
        let seeded = AccountService::seed_defaults(&mut book);
        assert!(seeded > 0);
        assert_eq!(AccountService::seed_defaults(&mut book), 0);
        assert_eq!(book.accounts.len(), seeded);
    }

    #[test]
    fn list_orders_by_kind_then_name() {
        let mut book = CashBook::new("Shop");
        AccountService::add(&mut book, "Salaries", AccountKind::Expense).unwrap();
        AccountService::add(&mut book, "Sales revenue", AccountKind::Revenue).unwrap();
        AccountService::add(&mut book, "Electricity", AccountKind::Expense).unwrap();
        let names: Vec<&str> = AccountService::list(&book)
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Sales revenue", "Electricity", "Salaries"]);
    }
}
