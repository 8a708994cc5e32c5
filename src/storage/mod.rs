//! Storage layer for till-audit
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the operation journal.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerRepository;

use crate::config::paths::AuditPaths;
use crate::error::AuditError;
use crate::journal::{JournalEntry, OpsJournal};
use crate::models::AuditRecord;

/// Main storage coordinator
pub struct Storage {
    paths: AuditPaths,
    pub ledger: LedgerRepository,
    journal: OpsJournal,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: AuditPaths) -> Result<Self, AuditError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            journal: OpsJournal::new(paths.journal_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AuditPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), AuditError> {
        self.ledger.load()?;
        Ok(())
    }

    /// Journal a created record; failure surfaces on stderr, never to the caller
    pub fn log_create(&self, record: &AuditRecord) {
        self.log_entry(JournalEntry::create(record));
    }

    /// Journal a deleted record
    pub fn log_delete(&self, record: &AuditRecord) {
        self.log_entry(JournalEntry::delete(record));
    }

    /// Journal a bulk delete
    pub fn log_purge(&self, count: usize) {
        self.log_entry(JournalEntry::purge(count));
    }

    /// Read the most recent journal entries, newest first
    pub fn recent_journal(&self, count: usize) -> Result<Vec<JournalEntry>, AuditError> {
        self.journal.read_recent(count)
    }

    fn log_entry(&self, entry: JournalEntry) {
        if let Err(e) = self.journal.log(&entry) {
            eprintln!("warning: {}", e);
        }
    }
}
