// ==========================================
// Luggage Fulfillment Tracking - Sales Order Normalizer
// ==========================================
// Index rows and packing-list item rows -> typed entities. Per-cell
// failures never fail the batch; every row yields exactly one entity.
// ==========================================

use crate::domain::sales_order::{PackingListSheet, SalesOrder, SalesOrderItem};
use crate::domain::types::OrderStatus;
use crate::normalizer::cell;
use crate::normalizer::field_map::{
    order_index, packing_item, DEFAULT_BRAND, DEFAULT_SO_NUMBER, INDEX_SOURCE_FILENAME,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

/// Normalize a `get_index` payload into sales orders.
///
/// Defaults per cell: absent id -> fresh UUID, absent SO number -> "TBA",
/// absent brand -> "UNKNOWN", absent/unknown status -> "In Production",
/// absent/malformed timestamp -> processing time. A non-array payload
/// yields an empty vec.
pub fn normalize_sales_orders(payload: &Value) -> Vec<SalesOrder> {
    cell::rows(payload).iter().map(normalize_order_row).collect()
}

fn normalize_order_row(row: &Value) -> SalesOrder {
    SalesOrder {
        id: cell::string_cell(row, order_index::ID)
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        so_number: cell::string_cell(row, order_index::SO_NUMBER)
            .unwrap_or_else(|| DEFAULT_SO_NUMBER.to_string()),
        brand: cell::string_cell(row, order_index::BRAND)
            .unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        customer_pos: split_po_codes(cell::string_cell(row, order_index::CUSTOMER_POS)),
        status: cell::string_cell(row, order_index::STATUS)
            .and_then(|s| OrderStatus::from_source_literal(&s))
            .unwrap_or(OrderStatus::InProduction),
        source_filename: INDEX_SOURCE_FILENAME.to_string(),
        imported_at: cell::string_cell(row, order_index::IMPORTED_AT)
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now),
        sheets: Vec::new(), // item data loads separately from the workbook tabs
    }
}

/// Comma-joined PO codes -> ordered list. Split on ',' with no trimming or
/// dedup; an empty source cell yields an empty list, never null.
fn split_po_codes(cell_value: Option<String>) -> Vec<String> {
    match cell_value {
        None => Vec::new(),
        Some(joined) => joined.split(',').map(str::to_string).collect(),
    }
}

/// Normalize packing-list item rows (one workbook tab).
///
/// total_qty is always recomputed from pcs_per_ctn * total_ctns; any
/// total-qty cell in the source is ignored.
pub fn normalize_packing_items(payload: &Value) -> Vec<SalesOrderItem> {
    cell::rows(payload).iter().map(normalize_item_row).collect()
}

pub(crate) fn normalize_item_row(row: &Value) -> SalesOrderItem {
    let pcs_per_ctn = cell::u32_cell(row, packing_item::PCS_PER_CTN).unwrap_or(0);
    let total_ctns = cell::u32_cell(row, packing_item::TOTAL_CTNS).unwrap_or(0);
    SalesOrderItem {
        id: Uuid::new_v4().to_string(),
        material_no: cell::string_cell(row, packing_item::MATERIAL_NO).unwrap_or_default(),
        name_spec: cell::string_cell(row, packing_item::NAME_SPEC).unwrap_or_default(),
        pcs_per_ctn,
        total_ctns,
        color: cell::string_cell(row, packing_item::COLOR).unwrap_or_default(),
        uli_po: cell::string_cell(row, packing_item::ULI_PO).unwrap_or_default(),
        total_qty: SalesOrderItem::compute_total_qty(pcs_per_ctn, total_ctns),
    }
}

/// Assemble one workbook tab into a sheet. The tab name doubles as the
/// customer PO number; item order is the tab's row order.
pub fn normalize_packing_sheet(sheet_name: &str, payload: &Value) -> PackingListSheet {
    PackingListSheet {
        id: Uuid::new_v4().to_string(),
        sheet_name: sheet_name.to_string(),
        customer_po: sheet_name.to_string(),
        items: normalize_packing_items(payload),
    }
}

/// Re-serialize a sales order to its positional index-row shape. Fields the
/// source lacked carry their filled defaults.
pub fn to_index_row(order: &SalesOrder) -> Vec<Value> {
    vec![
        json!(order.id),
        json!(order.so_number),
        json!(order.brand),
        json!(order.customer_pos.join(",")),
        json!(order.status.to_string()),
        json!(order.imported_at.to_rfc3339()),
    ]
}
