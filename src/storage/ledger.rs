//! Ledger repository for JSON storage
//!
//! Owns the audit-record table and id assignment. Every mutation rewrites
//! the ledger file atomically BEFORE the in-memory table is touched, so a
//! failed write leaves both the file and the process state exactly as they
//! were and no partial record ever becomes visible to a read.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AuditError;
use crate::models::{AuditRecord, NewRecord};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of the ledger file
///
/// `next_id` persists alongside the records so ids stay monotonic across
/// restarts and are never reused after a deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    records: Vec<AuditRecord>,
}

fn first_id() -> u64 {
    1
}

impl Default for LedgerFile {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            records: Vec::new(),
        }
    }
}

struct LedgerState {
    next_id: u64,
    records: BTreeMap<u64, AuditRecord>,
}

/// Repository for audit-record persistence
pub struct LedgerRepository {
    path: PathBuf,
    state: RwLock<LedgerState>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(LedgerState {
                next_id: first_id(),
                records: BTreeMap::new(),
            }),
        }
    }

    /// Load the ledger from disk
    pub fn load(&self) -> Result<(), AuditError> {
        let file_data: LedgerFile = read_json(&self.path)?;

        let mut state = self
            .state
            .write()
            .map_err(|e| AuditError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        state.records = file_data
            .records
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        // A hand-edited file may carry a stale counter; ids must stay ahead
        // of every record that ever existed.
        let max_id = state.records.keys().next_back().copied().unwrap_or(0);
        state.next_id = file_data.next_id.max(max_id + 1);

        Ok(())
    }

    /// Append a new record, assigning the next id
    ///
    /// The write to disk happens first; the in-memory table is only updated
    /// once the file rename has succeeded.
    pub fn append(&self, new: NewRecord) -> Result<AuditRecord, AuditError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| AuditError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let record = new.into_record(state.next_id);

        let mut records: Vec<AuditRecord> = state.records.values().cloned().collect();
        records.push(record.clone());
        persist(&self.path, state.next_id + 1, records)?;

        state.next_id += 1;
        state.records.insert(record.id, record.clone());
        Ok(record)
    }

    /// Get a record by id
    pub fn get(&self, id: u64) -> Result<Option<AuditRecord>, AuditError> {
        let state = self
            .state
            .read()
            .map_err(|e| AuditError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(state.records.get(&id).cloned())
    }

    /// Get all records, most recent first (ties broken by descending id)
    pub fn get_all(&self) -> Result<Vec<AuditRecord>, AuditError> {
        let state = self
            .state
            .read()
            .map_err(|e| AuditError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<AuditRecord> = state.records.values().cloned().collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Get records whose civil date falls within `[start, end]`, newest first
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AuditRecord>, AuditError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|r| r.civil_date() >= start && r.civil_date() <= end)
            .collect())
    }

    /// Delete the record with the given id, returning how many rows went away
    ///
    /// Deleting an id that is not present is a no-op success returning 0.
    pub fn delete(&self, id: u64) -> Result<usize, AuditError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| AuditError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !state.records.contains_key(&id) {
            return Ok(0);
        }

        let records: Vec<AuditRecord> = state
            .records
            .values()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        persist(&self.path, state.next_id, records)?;

        state.records.remove(&id);
        Ok(1)
    }

    /// Delete every record in a single atomic rewrite, keeping the id counter
    pub fn clear(&self) -> Result<usize, AuditError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| AuditError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let count = state.records.len();
        persist(&self.path, state.next_id, Vec::new())?;

        state.records.clear();
        Ok(count)
    }

    /// Count records
    pub fn count(&self) -> Result<usize, AuditError> {
        let state = self
            .state
            .read()
            .map_err(|e| AuditError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(state.records.len())
    }
}

fn persist(path: &Path, next_id: u64, records: Vec<AuditRecord>) -> Result<(), AuditError> {
    write_json_atomic(path, &LedgerFile { next_id, records })
}

fn sort_newest_first(records: &mut [AuditRecord]) {
    records.sort_by(|a, b| {
        b.recorded_at
            .cmp(&a.recorded_at)
            .then(b.id.cmp(&a.id))
    });
}
