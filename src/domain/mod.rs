//! Pure domain models (Entry, Account, Month). No I/O, no storage.

pub mod account;
pub mod entry;
pub mod period;

pub use account::{Account, AccountKind};
pub use entry::{Entry, EntryId, EntryInput};
pub use period::Month;
