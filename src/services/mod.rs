//! Service layer for till-audit
//!
//! Business logic on top of the storage layer: validation, timestamping,
//! and the deletion authorization gate.

pub mod ledger;

pub use ledger::{CreateAuditInput, CreatedAudit, LedgerFilter, LedgerService, UNSELECTED};
