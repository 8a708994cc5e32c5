//! Journal entry data structures
//!
//! Defines the shape of operation-journal entries: which ledger operation
//! ran, when, and a snapshot of the record it touched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AuditRecord;

/// Ledger operations recorded in the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A record was created
    Create,
    /// A single record was deleted
    Delete,
    /// The whole table was deleted
    Purge,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Purge => write!(f, "PURGE"),
        }
    }
}

/// A single journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the operation ran (UTC)
    pub timestamp: DateTime<Utc>,

    /// Operation performed
    pub operation: Operation,

    /// Id of the affected record, when a single record was affected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u64>,

    /// Terminal of the affected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,

    /// JSON snapshot of the affected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,

    /// How many records a purge removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purged_count: Option<usize>,
}

impl JournalEntry {
    /// Entry for a created record
    pub fn create(record: &AuditRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            record_id: Some(record.id),
            terminal_id: Some(record.terminal_id.clone()),
            record: serde_json::to_value(record).ok(),
            purged_count: None,
        }
    }

    /// Entry for a deleted record
    pub fn delete(record: &AuditRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            record_id: Some(record.id),
            terminal_id: Some(record.terminal_id.clone()),
            record: serde_json::to_value(record).ok(),
            purged_count: None,
        }
    }

    /// Entry for a bulk delete
    pub fn purge(count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Purge,
            record_id: None,
            terminal_id: None,
            record: None,
            purged_count: Some(count),
        }
    }

    /// One-line human summary for the journal view
    pub fn summary(&self) -> String {
        match self.operation {
            Operation::Create | Operation::Delete => format!(
                "{} {} record #{} (terminal {})",
                self.timestamp.format("%Y-%m-%d %H:%M:%S"),
                self.operation,
                self.record_id.unwrap_or(0),
                self.terminal_id.as_deref().unwrap_or("?"),
            ),
            Operation::Purge => format!(
                "{} {} removed {} record(s)",
                self.timestamp.format("%Y-%m-%d %H:%M:%S"),
                self.operation,
                self.purged_count.unwrap_or(0),
            ),
        }
    }
}
