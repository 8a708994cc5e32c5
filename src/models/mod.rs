//! Core data models for till-audit
//!
//! This module contains the data structures that represent the audit-ledger
//! domain: monetary amounts, audit records, and discrepancy classification.

pub mod discrepancy;
pub mod money;
pub mod record;

pub use discrepancy::{Discrepancy, TOLERANCE};
pub use money::{Money, MoneyParseError};
pub use record::{AuditRecord, NewRecord, TIMESTAMP_FORMAT};
