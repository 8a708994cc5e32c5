//! Operation journal for till-audit
//!
//! Records every ledger mutation (create, delete, purge) with a record
//! snapshot in an append-only JSONL log. This is the observability surface
//! of the tool; a journal failure is reported but never fails the ledger
//! operation it describes.

mod entry;
mod logger;

pub use entry::{JournalEntry, Operation};
pub use logger::OpsJournal;
