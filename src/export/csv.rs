//! CSV export functionality
//!
//! Serializes an audit-record sequence into a spreadsheet artifact. A pure
//! function of its input: the ledger is not consulted. Monetary columns are
//! written in the regional currency convention ("R$ 1.234,56"), which is why
//! the fields are quoted by the writer, and a matching reader is provided so
//! the artifact round-trips.

use chrono::NaiveDateTime;

use crate::error::{AuditError, AuditResult};
use crate::models::{AuditRecord, Money, TIMESTAMP_FORMAT};

/// Spreadsheet column headers, in display order
pub const CSV_HEADERS: [&str; 9] = [
    "ID",
    "Date/Time",
    "Terminal",
    "Operator",
    "Supervisor",
    "Auditor",
    "Counted Cash",
    "Counted Electronic",
    "Difference",
];

/// Serialize records into CSV spreadsheet bytes
pub fn export_records_csv(records: &[AuditRecord], currency_symbol: &str) -> AuditResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| AuditError::Export(e.to_string()))?;

    for record in records {
        writer
            .write_record([
                record.id.to_string(),
                record.recorded_at.format(TIMESTAMP_FORMAT).to_string(),
                record.terminal_id.clone(),
                record.operator_name.clone(),
                record.supervisor_name.clone(),
                record.auditor_name.clone(),
                record.counted_cash.format_grouped(currency_symbol),
                record.counted_electronic.format_grouped(currency_symbol),
                record.difference.format_grouped(currency_symbol),
            ])
            .map_err(|e| AuditError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| AuditError::Export(e.to_string()))
}

/// Parse spreadsheet bytes produced by [`export_records_csv`] back into records
///
/// `expected_value` is not an exported column; it is restored as the constant
/// 0.00 it always holds.
pub fn read_records_csv(bytes: &[u8]) -> AuditResult<Vec<AuditRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let mut records = Vec::new();

    for (row_num, row) in reader.records().enumerate() {
        let row = row.map_err(|e| AuditError::Export(e.to_string()))?;

        let field = |idx: usize| -> AuditResult<&str> {
            row.get(idx).ok_or_else(|| {
                AuditError::Export(format!("Row {}: missing column {}", row_num + 1, idx))
            })
        };

        let id: u64 = field(0)?
            .parse()
            .map_err(|e| AuditError::Export(format!("Row {}: bad id: {}", row_num + 1, e)))?;

        let recorded_at = NaiveDateTime::parse_from_str(field(1)?, TIMESTAMP_FORMAT)
            .map_err(|e| AuditError::Export(format!("Row {}: bad timestamp: {}", row_num + 1, e)))?;

        let money = |idx: usize| -> AuditResult<Money> {
            Money::parse_grouped(field(idx)?).map_err(|e| {
                AuditError::Export(format!("Row {}: bad amount: {}", row_num + 1, e))
            })
        };

        records.push(AuditRecord {
            id,
            terminal_id: field(2)?.to_string(),
            recorded_at,
            operator_name: field(3)?.to_string(),
            supervisor_name: field(4)?.to_string(),
            auditor_name: field(5)?.to_string(),
            counted_cash: money(6)?,
            expected_value: Money::zero(),
            difference: money(8)?,
            counted_electronic: money(7)?,
        });
    }

    Ok(records)
}
