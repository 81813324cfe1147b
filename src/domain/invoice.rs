// ==========================================
// Luggage Fulfillment Tracking - Invoice Allocation Model
// ==========================================
// Allocation lines returned by the master-sheet script for a
// (brand, invoice) query. Field names mirror the script's data contract.
// ==========================================

use crate::domain::types::QtyStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// InvoiceCheckResult
// ==========================================
// One allocation line. QTY is the requested quantity with rework already
// subtracted upstream; QTY_STATUS is the upstream readiness classification
// and is trusted as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct InvoiceCheckResult {
    pub po: String,
    #[serde(rename = "TYPE")]
    pub item_type: String,
    pub color: String,
    pub size: String,
    pub qty: u64,
    pub rework: u64, // units pulled out of available stock
    #[serde(rename = "QTY_STATUS")]
    pub qty_status: QtyStatus,
    #[serde(rename = "INV_STATUS")]
    pub inv_status: String, // free-text allocation/export note
}

// ==========================================
// InvoiceAllocation
// ==========================================
// Aggregated view the Invoice Checker displays. Row order is the backend's
// FIFO ledger order (export date asc, then source column position) and is
// never re-sorted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceAllocation {
    pub brand: String,
    pub invoice: String,
    pub rows: Vec<InvoiceCheckResult>,
    pub total_qty: u64, // plain sum of row QTY
}

impl InvoiceAllocation {
    /// An empty allocation is a valid outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// User-facing text for the empty-result case.
    pub fn not_found_message(&self) -> String {
        format!(
            "Invoice {} not found for {} in the master sheet.",
            self.invoice, self.brand
        )
    }
}
