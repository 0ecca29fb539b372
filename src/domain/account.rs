use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chart-of-accounts label used to categorize cash movements for display.
/// Entries do not reference accounts; the chart stands on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
        }
    }

    /// Default chart seeded into an empty book, mirroring the starter set a
    /// small business expects on first run.
    pub fn default_chart() -> Vec<Account> {
        let revenue = [
            "Service revenue",
            "Sales revenue",
            "Rental income",
            "Extraordinary income",
        ];
        let expense = [
            "Merchandise purchases",
            "Freight and insurance",
            "Water and sewage",
            "Electricity",
            "Telephone and internet",
            "Cleaning supplies",
            "Office supplies",
            "Rent",
            "Salaries",
            "Payroll taxes",
        ];
        revenue
            .iter()
            .map(|name| Account::new(*name, AccountKind::Revenue))
            .chain(
                expense
                    .iter()
                    .map(|name| Account::new(*name, AccountKind::Expense)),
            )
            .collect()
    }
}

/// Enumerates the supported account classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccountKind {
    Revenue,
    Expense,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Revenue => "Revenue",
            AccountKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}
