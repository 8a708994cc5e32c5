//! Audit record model
//!
//! One record per cash-register reconciliation event: which terminal was
//! counted, by whom, the cash and TEF totals, and the stored difference.
//!
//! Serialized field names follow the logical schema of the original
//! deployment (`prevention_name`, `counted_value`, `tef_value`), so existing
//! exports and ledger files keep their meaning.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::discrepancy::Discrepancy;
use super::money::Money;

/// Timestamp wire format: "YYYY-MM-DD HH:MM:SS" in the fixed civil timezone
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// serde adapter persisting timestamps in the civil "YYYY-MM-DD HH:MM:SS" form
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A persisted register audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique id, monotonically assigned by the ledger store; never reused
    pub id: u64,

    /// Checkout terminal the count was taken at
    pub terminal_id: String,

    /// Creation moment in the fixed civil timezone, second precision
    #[serde(rename = "audit_datetime", with = "timestamp_format")]
    pub recorded_at: NaiveDateTime,

    /// Register operator on shift
    pub operator_name: String,

    /// Supervisor witnessing the count
    pub supervisor_name: String,

    /// Loss-prevention auditor running the count
    #[serde(rename = "prevention_name")]
    pub auditor_name: String,

    /// Cash physically counted in the drawer
    #[serde(rename = "counted_value")]
    pub counted_cash: Money,

    /// Reconciliation target; constant 0.00 in this deployment, reserved
    pub expected_value: Money,

    /// counted_cash - counted_electronic, fixed at creation
    pub difference: Money,

    /// Total reported by the electronic-payment (TEF) channel
    #[serde(rename = "tef_value")]
    pub counted_electronic: Money,
}

impl AuditRecord {
    /// Classification of this record's stored difference
    pub fn outcome(&self) -> Discrepancy {
        Discrepancy::of(self.difference)
    }

    /// Civil calendar date the audit was recorded on
    pub fn civil_date(&self) -> NaiveDate {
        self.recorded_at.date()
    }
}

/// Field set for a record about to be created
///
/// The ledger store turns this into an [`AuditRecord`] when it assigns the
/// id; `difference` and `expected_value` are derived here and nowhere else,
/// which is what keeps the stored-difference invariant intact.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub terminal_id: String,
    pub recorded_at: NaiveDateTime,
    pub operator_name: String,
    pub supervisor_name: String,
    pub auditor_name: String,
    pub counted_cash: Money,
    pub counted_electronic: Money,
}

impl NewRecord {
    /// Materialize the record under its store-assigned id
    pub fn into_record(self, id: u64) -> AuditRecord {
        let difference = self.counted_cash - self.counted_electronic;
        AuditRecord {
            id,
            terminal_id: self.terminal_id,
            recorded_at: self.recorded_at,
            operator_name: self.operator_name,
            supervisor_name: self.supervisor_name,
            auditor_name: self.auditor_name,
            counted_cash: self.counted_cash,
            expected_value: Money::zero(),
            difference,
            counted_electronic: self.counted_electronic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new(cash: i64, tef: i64) -> NewRecord {
        NewRecord {
            terminal_id: "5".into(),
            recorded_at: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            operator_name: "A".into(),
            supervisor_name: "B".into(),
            auditor_name: "C".into(),
            counted_cash: Money::from_cents(cash),
            counted_electronic: Money::from_cents(tef),
        }
    }

    #[test]
    fn test_difference_fixed_at_creation() {
        let record = sample_new(10_000, 12_000).into_record(1);
        assert_eq!(record.difference, Money::from_cents(-2000));
        assert_eq!(
            record.difference,
            record.counted_cash - record.counted_electronic
        );
        assert_eq!(record.expected_value, Money::zero());
    }

    #[test]
    fn test_outcome_from_stored_difference() {
        assert_eq!(
            sample_new(10_000, 12_000).into_record(1).outcome(),
            Discrepancy::Shortage
        );
        assert_eq!(
            sample_new(5_000, 5_000).into_record(2).outcome(),
            Discrepancy::Balanced
        );
        assert_eq!(
            sample_new(7_000, 5_000).into_record(3).outcome(),
            Discrepancy::Overage
        );
    }

    #[test]
    fn test_schema_field_names() {
        let record = sample_new(10_000, 12_000).into_record(7);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["terminal_id"], "5");
        assert_eq!(value["audit_datetime"], "2025-06-01 14:30:00");
        assert_eq!(value["prevention_name"], "C");
        assert_eq!(value["counted_value"], 10_000);
        assert_eq!(value["tef_value"], 12_000);
        assert_eq!(value["difference"], -2000);
        assert_eq!(value["expected_value"], 0);
    }

    #[test]
    fn test_timestamp_round_trip() {
        let record = sample_new(100, 0).into_record(1);
        let json = serde_json::to_string(&record).unwrap();
        let back: AuditRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.civil_date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }
}
