pub mod json_backend;

use crate::errors::Result;
use crate::ledger::CashBook;

pub use json_backend::JsonStorage;

/// Abstraction over persistence backends capable of storing cash books and
/// their backup snapshots. Each call is a single logical unit: a save either
/// replaces the whole book file or leaves the previous one intact.
pub trait StorageBackend: Send + Sync {
    fn save(&self, book: &CashBook, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<CashBook>;
    fn list_books(&self) -> Result<Vec<String>>;
    fn delete(&self, name: &str) -> Result<()>;
    fn backup(&self, book: &CashBook, name: &str, note: Option<&str>) -> Result<String>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<CashBook>;
}
