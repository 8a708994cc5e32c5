//! Append-only operation journal
//!
//! Writes journal entries to a log file as line-delimited JSON (JSONL);
//! each line is one complete entry, flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{AuditError, AuditResult};

use super::entry::JournalEntry;

/// Handles writing entries to the operation journal
pub struct OpsJournal {
    log_path: PathBuf,
}

impl OpsJournal {
    /// Create a new journal writing to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry to the journal
    pub fn log(&self, entry: &JournalEntry) -> AuditResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| AuditError::Journal(format!("Failed to open journal: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| AuditError::Journal(format!("Failed to serialize entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| AuditError::Journal(format!("Failed to write entry: {}", e)))?;

        file.flush()
            .map_err(|e| AuditError::Journal(format!("Failed to flush journal: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> AuditResult<Vec<JournalEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| AuditError::Journal(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                AuditError::Journal(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: JournalEntry = serde_json::from_str(&line).map_err(|e| {
                AuditError::Journal(format!(
                    "Failed to parse journal entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries, newest first
    pub fn read_recent(&self, count: usize) -> AuditResult<Vec<JournalEntry>> {
        let mut entries = self.read_all()?;
        entries.reverse();
        entries.truncate(count);
        Ok(entries)
    }
}
