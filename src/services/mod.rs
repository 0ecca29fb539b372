//! Stateless services over a `CashBook`: validated CRUD, balance
//! recalculation, and period summaries.

pub mod account_service;
pub mod balance_service;
pub mod entry_service;
pub mod summary_service;

pub use account_service::AccountService;
pub use balance_service::BalanceService;
pub use entry_service::EntryService;
pub use summary_service::{AnnualSummary, PeriodSummary, SummaryService};
