// ==========================================
// Luggage Fulfillment Tracking - Invoice Line Normalizer
// ==========================================
// check_invoice rows are object-shaped, keyed by the master-sheet script's
// data contract. Row order is the script's FIFO ledger order and is kept
// exactly as received.
// ==========================================

use crate::domain::invoice::InvoiceCheckResult;
use crate::domain::types::QtyStatus;
use crate::normalizer::cell;
use serde_json::Value;

/// Normalize a `check_invoice` payload into allocation lines.
///
/// Defaults per field: absent text -> empty string, absent/negative
/// quantities -> 0, unrecognized readiness literal -> NOT READY.
pub fn normalize_invoice_rows(payload: &Value) -> Vec<InvoiceCheckResult> {
    cell::rows(payload).iter().map(normalize_invoice_row).collect()
}

fn normalize_invoice_row(row: &Value) -> InvoiceCheckResult {
    InvoiceCheckResult {
        po: cell::string_field(row, "PO").unwrap_or_default(),
        item_type: cell::string_field(row, "TYPE").unwrap_or_default(),
        color: cell::string_field(row, "COLOR").unwrap_or_default(),
        size: cell::string_field(row, "SIZE").unwrap_or_default(),
        qty: cell::u64_field(row, "QTY").unwrap_or(0),
        rework: cell::u64_field(row, "REWORK").unwrap_or(0),
        qty_status: cell::string_field(row, "QTY_STATUS")
            .map(|s| QtyStatus::from_source_literal(&s))
            .unwrap_or(QtyStatus::NotReady),
        inv_status: cell::string_field(row, "INV_STATUS").unwrap_or_default(),
    }
}
