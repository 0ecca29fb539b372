//! The cash book aggregate: all entries, the chart of accounts, and
//! per-period opening balances, persistence-friendly.

pub mod book;

pub use book::{CashBook, CURRENT_SCHEMA_VERSION};
