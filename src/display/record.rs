//! Audit history display formatting
//!
//! Renders the queried record sequence as a terminal table, with an outcome
//! column driven by the same classification rule as the result alert.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::AuditRecord;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date/Time")]
    recorded_at: String,
    #[tabled(rename = "Terminal")]
    terminal: String,
    #[tabled(rename = "Operator")]
    operator: String,
    #[tabled(rename = "Supervisor")]
    supervisor: String,
    #[tabled(rename = "Auditor")]
    auditor: String,
    #[tabled(rename = "Counted Cash")]
    counted_cash: String,
    #[tabled(rename = "Counted TEF")]
    counted_electronic: String,
    #[tabled(rename = "Difference")]
    difference: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
}

impl HistoryRow {
    fn from_record(record: &AuditRecord, symbol: &str) -> Self {
        Self {
            id: record.id,
            recorded_at: record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            terminal: record.terminal_id.clone(),
            operator: record.operator_name.clone(),
            supervisor: record.supervisor_name.clone(),
            auditor: record.auditor_name.clone(),
            counted_cash: record.counted_cash.format_grouped(symbol),
            counted_electronic: record.counted_electronic.format_grouped(symbol),
            difference: record.difference.format_grouped(symbol),
            outcome: record.outcome().label().to_string(),
        }
    }
}

/// Format the audit history as a table with a count-and-id-range footer
pub fn format_history_table(records: &[AuditRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No audits recorded for the selected period.\n".to_string();
    }

    let rows: Vec<HistoryRow> = records
        .iter()
        .map(|r| HistoryRow::from_record(r, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    let min_id = records.iter().map(|r| r.id).min().unwrap_or(0);
    let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);

    format!(
        "{}\n{} audit(s) shown. IDs {} to {}.\n",
        table,
        records.len(),
        min_id,
        max_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewRecord};
    use chrono::NaiveDate;

    fn sample(id: u64, terminal: &str, cash: i64, tef: i64) -> AuditRecord {
        NewRecord {
            terminal_id: terminal.into(),
            recorded_at: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            operator_name: "ANA".into(),
            supervisor_name: "SIMONE".into(),
            auditor_name: "GABRIEL".into(),
            counted_cash: Money::from_cents(cash),
            counted_electronic: Money::from_cents(tef),
        }
        .into_record(id)
    }

    #[test]
    fn test_empty_history() {
        let out = format_history_table(&[], "R$");
        assert!(out.contains("No audits recorded"));
    }

    #[test]
    fn test_table_contains_rows_and_footer() {
        let records = vec![sample(3, "5", 10_000, 12_000), sample(1, "2", 5_000, 5_000)];
        let out = format_history_table(&records, "R$");

        assert!(out.contains("Terminal"));
        assert!(out.contains("SHORTAGE"));
        assert!(out.contains("BALANCED"));
        assert!(out.contains("-R$ 20,00"));
        assert!(out.contains("2 audit(s) shown. IDs 1 to 3."));
    }
}
