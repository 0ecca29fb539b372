//! JSON-file persistence for cash books.
//!
//! One file per book under `<root>/books/`, timestamped backup copies under
//! `<root>/backups/<book>/` with retention pruning. Saves go through a temp
//! file plus rename so an interrupted write never corrupts the previous
//! book on disk.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Utc;

use crate::errors::{LedgerError, Result};
use crate::ledger::{CashBook, CURRENT_SCHEMA_VERSION};
use crate::utils::paths::{backups_dir_in, books_dir_in, ensure_dir};

const BOOK_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

#[derive(Debug, Clone)]
pub struct JsonStorage {
    books_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: impl Into<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        let books_dir = books_dir_in(&root);
        let backups_dir = backups_dir_in(&root);
        ensure_dir(&books_dir)?;
        ensure_dir(&backups_dir)?;
        Ok(Self {
            books_dir,
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(crate::utils::paths::app_data_dir(), None)
    }

    pub fn book_path(&self, name: &str) -> PathBuf {
        self.books_dir
            .join(format!("{}.{}", slug_name(name), BOOK_EXTENSION))
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(slug_name(name))
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let backups = self.sorted_backups(name)?;
        for stale in backups.iter().skip(self.retention) {
            let _ = fs::remove_file(self.backup_dir(name).join(stale));
        }
        Ok(())
    }

    fn sorted_backups(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BOOK_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                entries.push(file_name.to_string());
            }
        }
        // Backup names embed a sortable timestamp; newest first.
        entries.sort_by(|a, b| b.cmp(a));
        Ok(entries)
    }
}

impl super::StorageBackend for JsonStorage {
    fn save(&self, book: &CashBook, name: &str) -> Result<()> {
        let path = self.book_path(name);
        write_book_atomic(book, &path)?;
        tracing::debug!(book = name, path = %path.display(), "cash book saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<CashBook> {
        let path = self.book_path(name);
        if !path.exists() {
            return Err(LedgerError::BookNotFound(name.to_string()));
        }
        read_book(&path)
    }

    fn list_books(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.books_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BOOK_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.book_path(name);
        if !path.exists() {
            return Err(LedgerError::BookNotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn backup(&self, book: &CashBook, name: &str, note: Option<&str>) -> Result<String> {
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{}_{}", slug_name(name), timestamp);
        if let Some(label) = sanitize_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{}.{}", stem, BOOK_EXTENSION);
        write_book_atomic(book, &dir.join(&file_name))?;
        self.prune_backups(name)?;
        Ok(file_name)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        self.sorted_backups(name)
    }

    fn restore(&self, name: &str, backup_name: &str) -> Result<CashBook> {
        let backup_path = self.backup_dir(name).join(backup_name);
        if !backup_path.exists() {
            return Err(LedgerError::Storage(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let book = read_book(&backup_path)?;
        write_book_atomic(&book, &self.book_path(name))?;
        Ok(book)
    }
}

fn write_book_atomic(book: &CashBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(book)?;
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn read_book(path: &Path) -> Result<CashBook> {
    let data = fs::read_to_string(path)?;
    let book: CashBook = serde_json::from_str(&data)?;
    if book.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::Storage(format!(
            "`{}` was written by a newer schema (version {})",
            path.display(),
            book.schema_version
        )));
    }
    Ok(book)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn slug_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "book".into()
    } else {
        sanitized
    }
}

fn sanitize_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !sanitized.is_empty() && !last_dash {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageBackend;
    use tempfile::TempDir;

    fn storage() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path(), Some(2)).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn slug_name_normalizes_and_falls_back() {
        assert_eq!(slug_name("My Shop 2024"), "my_shop_2024");
        assert_eq!(slug_name("  ***  "), "book");
    }

    #[test]
    fn load_missing_book_reports_not_found() {
        let (storage, _guard) = storage();
        let err = storage.load("nowhere").unwrap_err();
        assert!(matches!(err, LedgerError::BookNotFound(_)));
    }

    #[test]
    fn newer_schema_is_rejected() {
        let (storage, _guard) = storage();
        let mut book = CashBook::new("Future");
        book.schema_version = CURRENT_SCHEMA_VERSION + 1;
        storage.save(&book, "future").unwrap();
        let err = storage.load("future").unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }

    #[test]
    fn backup_retention_prunes_oldest() {
        let (storage, _guard) = storage();
        let book = CashBook::new("Shop");
        for note in ["one", "two", "three"] {
            storage.backup(&book, "shop", Some(note)).unwrap();
        }
        let kept = storage.list_backups("shop").unwrap();
        assert_eq!(kept.len(), 2, "retention of 2 must prune the oldest");
    }
}
