//! Ledger service
//!
//! Business logic for the audit ledger: validated creation, date-range
//! queries, single and secret-gated bulk deletion.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{AuditError, AuditResult};
use crate::models::{AuditRecord, Discrepancy, Money, NewRecord};
use crate::storage::Storage;

/// Placeholder shown by selection prompts before a choice is made; a
/// personnel field equal to it counts as missing.
pub const UNSELECTED: &str = "unselected";

/// Service for ledger operations
pub struct LedgerService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

/// Date-range filter for ledger queries
///
/// Dates are civil calendar dates, both ends inclusive. An inverted range
/// matches nothing rather than failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl LedgerFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Include records on or after this civil date
    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Include records on or before this civil date
    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }
}

/// Input for creating a new audit record
#[derive(Debug, Clone)]
pub struct CreateAuditInput {
    pub terminal_id: String,
    pub operator_name: String,
    pub supervisor_name: String,
    pub auditor_name: String,
    pub counted_cash: Money,
    pub counted_electronic: Money,
}

/// What Create hands back to its caller: the persisted record plus its
/// classification, ready for the one-shot result alert. This value replaces
/// the transient shared alert slot of the original system; it lives only as
/// long as the caller keeps it.
#[derive(Debug, Clone)]
pub struct CreatedAudit {
    pub record: AuditRecord,
    pub outcome: Discrepancy,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Create a new audit record
    ///
    /// Validates the input, stamps the current time in the configured civil
    /// timezone, persists atomically, and returns the record with its
    /// discrepancy classification.
    pub fn create(&self, input: CreateAuditInput) -> AuditResult<CreatedAudit> {
        validate_input(&input)?;

        let record = self.storage.ledger.append(NewRecord {
            terminal_id: input.terminal_id.trim().to_string(),
            recorded_at: self.settings.local_now(),
            operator_name: input.operator_name.trim().to_string(),
            supervisor_name: input.supervisor_name.trim().to_string(),
            auditor_name: input.auditor_name.trim().to_string(),
            counted_cash: input.counted_cash,
            counted_electronic: input.counted_electronic,
        })?;

        self.storage.log_create(&record);

        Ok(CreatedAudit {
            outcome: record.outcome(),
            record,
        })
    }

    /// List records matching the filter, newest first
    pub fn query(&self, filter: LedgerFilter) -> AuditResult<Vec<AuditRecord>> {
        match (filter.start, filter.end) {
            (Some(start), Some(end)) if start > end => Ok(Vec::new()),
            (Some(start), Some(end)) => self.storage.ledger.get_by_date_range(start, end),
            (Some(start), None) => {
                let mut records = self.storage.ledger.get_all()?;
                records.retain(|r| r.civil_date() >= start);
                Ok(records)
            }
            (None, Some(end)) => {
                let mut records = self.storage.ledger.get_all()?;
                records.retain(|r| r.civil_date() <= end);
                Ok(records)
            }
            (None, None) => self.storage.ledger.get_all(),
        }
    }

    /// Delete a single record by id, returning how many rows were removed
    ///
    /// Deleting an id that no longer exists (a stale view, for instance) is
    /// a benign no-op returning 0.
    pub fn delete_one(&self, id: u64) -> AuditResult<usize> {
        let record = self.storage.ledger.get(id)?;
        let deleted = self.storage.ledger.delete(id)?;

        if deleted > 0 {
            if let Some(record) = record {
                self.storage.log_delete(&record);
            }
        }

        Ok(deleted)
    }

    /// Delete every record, gated by the configured admin secret
    ///
    /// The comparison is exact and case-sensitive; a mismatch deletes
    /// nothing. On success the whole table is removed in one atomic rewrite
    /// and the id counter keeps counting from where it was.
    pub fn delete_all(&self, supplied_secret: &str) -> AuditResult<usize> {
        if supplied_secret != self.settings.admin_secret {
            return Err(AuditError::Unauthorized);
        }

        let deleted = self.storage.ledger.clear()?;
        self.storage.log_purge(deleted);
        Ok(deleted)
    }
}

fn validate_input(input: &CreateAuditInput) -> AuditResult<()> {
    if input.terminal_id.trim().is_empty() {
        return Err(AuditError::Validation("Terminal is required".into()));
    }

    for (label, value) in [
        ("Operator", &input.operator_name),
        ("Supervisor", &input.supervisor_name),
        ("Auditor", &input.auditor_name),
    ] {
        let value = value.trim();
        if value.is_empty() || value == UNSELECTED {
            return Err(AuditError::Validation(format!("{} is required", label)));
        }
    }

    if input.counted_cash.is_negative() {
        return Err(AuditError::Validation(
            "Counted cash cannot be negative".into(),
        ));
    }
    if input.counted_electronic.is_negative() {
        return Err(AuditError::Validation(
            "Counted electronic (TEF) total cannot be negative".into(),
        ));
    }

    Ok(())
}
