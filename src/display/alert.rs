//! One-shot result alert formatting
//!
//! After each registration the original system flashed a large banner naming
//! the outcome; here the banner is rendered from the value Create returns,
//! so there is no shared alert state to clear.

use crate::models::Discrepancy;
use crate::services::CreatedAudit;

const RULE: &str =
    "==============================================================";

/// Format the classification banner for a freshly created audit
pub fn format_result_alert(created: &CreatedAudit, symbol: &str) -> String {
    let record = &created.record;
    let cash = record.counted_cash.format_grouped(symbol);
    let tef = record.counted_electronic.format_grouped(symbol);
    let diff = record.difference.format_grouped(symbol);

    let (title, detail) = match created.outcome {
        Discrepancy::Shortage => (
            format!("CASH SHORTAGE AT TERMINAL {}", record.terminal_id),
            format!("Counted cash ({}) is LESS than the TEF total ({}).", cash, tef),
        ),
        Discrepancy::Overage => (
            format!("CASH OVERAGE AT TERMINAL {}", record.terminal_id),
            format!("Counted cash ({}) is MORE than the TEF total ({}).", cash, tef),
        ),
        Discrepancy::Balanced => (
            format!("REGISTER BALANCED AT TERMINAL {}", record.terminal_id),
            format!("Counted cash and TEF totals agree at {}.", cash),
        ),
    };

    format!(
        "{}\n  {}\n  Difference: {}\n  {}\n{}\n",
        RULE, title, diff, detail, RULE
    )
}
