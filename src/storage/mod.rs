//! Storage layer for the ledger
//!
//! One JSON document holds every month record. The store loads it leniently
//! (a missing or malformed file becomes an empty document), hands out month
//! records, and writes the whole document back atomically after every
//! successful mutation.

pub mod file_io;

pub use file_io::{read_json, read_json_lenient, write_json_atomic};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{MonthKey, MonthRecord};

/// The persisted document: every month record, keyed by "YYYY-MM"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub months: BTreeMap<MonthKey, MonthRecord>,
}

impl LedgerDocument {
    /// Get a month's record if that month has been touched before
    pub fn month(&self, key: MonthKey) -> Option<&MonthRecord> {
        self.months.get(&key)
    }

    /// Get a month's record, creating an empty one on first access.
    /// Once created, a record persists indefinitely.
    pub fn month_mut(&mut self, key: MonthKey) -> &mut MonthRecord {
        self.months.entry(key).or_default()
    }
}

/// Owns the ledger document and the file it persists to
pub struct LedgerStore {
    path: PathBuf,
    document: LedgerDocument,
}

impl LedgerStore {
    /// Open the store at the configured ledger file, loading leniently:
    /// an absent or unparseable file yields an empty document.
    pub fn open(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Self::open_at(paths.ledger_file())
    }

    /// Open the store against an explicit file path
    pub fn open_at(path: PathBuf) -> LedgerResult<Self> {
        let document = read_json_lenient(&path)?;
        Ok(Self { path, document })
    }

    /// The file this store persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &LedgerDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut LedgerDocument {
        &mut self.document
    }

    /// Get a month's record if present
    pub fn month(&self, key: MonthKey) -> Option<&MonthRecord> {
        self.document.month(key)
    }

    /// Get a month's record, creating it lazily
    pub fn month_mut(&mut self, key: MonthKey) -> &mut MonthRecord {
        self.document.month_mut(key)
    }

    /// Persist the whole document atomically
    pub fn save(&self) -> LedgerResult<()> {
        write_json_atomic(&self.path, &self.document)
    }

    /// Delete the stored file and reset the in-memory document
    pub fn wipe(&mut self) -> LedgerResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.document = LedgerDocument::default();
        Ok(())
    }
}
