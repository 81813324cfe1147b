// ==========================================
// Luggage Fulfillment Tracking - Stuffing List Model
// ==========================================
// One export/shipment record from the ShippingRecord sheet, linking an
// invoice and container to a sales order. sales_order_id is a weak
// reference: relation only, no ownership.
// ==========================================

use crate::domain::sales_order::SalesOrderItem;
use serde::{Deserialize, Serialize};

// ==========================================
// StuffingList
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StuffingList {
    pub id: String,
    pub invoice_no: String, // business key
    pub sales_order_id: String,
    pub container_no: String,
    pub seal_no: Option<String>,
    // Kept as the source literal: absence means "not yet shipped", so a
    // malformed date must not collapse into absence via a lossy re-parse.
    pub export_date: Option<String>,
    // True iff the source status cell is the literal "Shipped" or raw true.
    pub is_finalized: bool,
    pub items: Vec<StuffingListItem>,
}

// ==========================================
// StuffingListItem
// ==========================================
// A sales-order item extended with the container carton-range allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StuffingListItem {
    #[serde(flatten)]
    pub item: SalesOrderItem,
    pub carton_start: Option<u32>,
    pub carton_end: Option<u32>,
}
