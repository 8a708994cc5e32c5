//! till-audit - Terminal-based cash register audit ledger
//!
//! This library records point-in-time cash-register reconciliation events:
//! for a given checkout terminal it captures the cash physically counted
//! against the total reported by the electronic-payment (TEF) channel,
//! classifies the discrepancy, and keeps the event with its responsible
//! personnel and timestamp for later querying, deletion, and export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, audit records, classification)
//! - `storage`: JSON file storage layer with atomic writes
//! - `services`: Business logic layer (the ledger operations)
//! - `journal`: Append-only operation journal
//! - `export`: Spreadsheet export
//! - `display`: Terminal rendering of tables and alerts
//! - `cli`: Command definitions and handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod journal;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{AuditError, AuditResult};
