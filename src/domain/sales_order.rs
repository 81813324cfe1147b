// ==========================================
// Luggage Fulfillment Tracking - Sales Order Model
// ==========================================
// One customer order extracted from a packing-list workbook. The workbook
// lives in Drive; the index sheet (ExpSched) is the system of record and
// these structs are per-fetch projections of it.
// ==========================================

use crate::domain::types::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// SalesOrder
// ==========================================
// (so_number, brand) is expected unique per import. `sheets` stays empty
// until item data is loaded from the workbook tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: String,                // opaque identifier, unique
    pub so_number: String,         // business key, human-entered
    pub brand: String,             // must match a known brand, else "UNKNOWN"
    pub customer_pos: Vec<String>, // source column order, duplicates allowed
    pub status: OrderStatus,       // stored literal or derived (engine)
    pub source_filename: String,
    pub imported_at: DateTime<Utc>,
    pub sheets: Vec<PackingListSheet>, // one per customer PO tab
}

// ==========================================
// PackingListSheet
// ==========================================
// One tab of the source workbook, scoped to one customer PO. Item order is
// the row order in the source tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingListSheet {
    pub id: String,
    pub sheet_name: String, // usually the customer PO number
    pub customer_po: String,
    pub items: Vec<SalesOrderItem>,
}

// ==========================================
// SalesOrderItem
// ==========================================
// total_qty is derived: recomputed from pcs_per_ctn * total_ctns on every
// load, never trusted from the source cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderItem {
    pub id: String,
    pub material_no: String, // Col B
    pub name_spec: String,   // Col C
    pub pcs_per_ctn: u32,    // Col D
    pub total_ctns: u32,     // Col E
    pub color: String,       // Col F
    pub uli_po: String,      // Col H
    pub total_qty: u64,      // pcs_per_ctn * total_ctns
}

impl SalesOrderItem {
    /// The only valid way to obtain total_qty.
    pub fn compute_total_qty(pcs_per_ctn: u32, total_ctns: u32) -> u64 {
        u64::from(pcs_per_ctn) * u64::from(total_ctns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_total_qty() {
        assert_eq!(SalesOrderItem::compute_total_qty(24, 10), 240);
        assert_eq!(SalesOrderItem::compute_total_qty(0, 10), 0);
        assert_eq!(SalesOrderItem::compute_total_qty(24, 0), 0);
    }

    #[test]
    fn test_compute_total_qty_no_overflow_at_u32_bounds() {
        let qty = SalesOrderItem::compute_total_qty(u32::MAX, u32::MAX);
        assert_eq!(qty, u64::from(u32::MAX) * u64::from(u32::MAX));
    }
}
