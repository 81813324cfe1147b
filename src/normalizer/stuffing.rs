// ==========================================
// Luggage Fulfillment Tracking - Stuffing List Normalizer
// ==========================================
// Export rows from the ShippingRecord sheet -> StuffingList entities.
// ==========================================

use crate::domain::stuffing::{StuffingList, StuffingListItem};
use crate::normalizer::cell;
use crate::normalizer::field_map::{export_record, stuffing_item, FINALIZED_LITERAL};
use crate::normalizer::sales_order::normalize_item_row;
use serde_json::{json, Value};
use uuid::Uuid;

/// Normalize a `get_exports` payload into stuffing lists.
///
/// A list is finalized iff the status cell is the literal "Shipped" or the
/// raw boolean true; anything else (including "true" as text) leaves it
/// open. An absent export date means "not yet shipped".
pub fn normalize_stuffing_lists(payload: &Value) -> Vec<StuffingList> {
    cell::rows(payload).iter().map(normalize_export_row).collect()
}

fn normalize_export_row(row: &Value) -> StuffingList {
    StuffingList {
        id: cell::string_cell(row, export_record::ID)
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        invoice_no: cell::string_cell(row, export_record::INVOICE_NO).unwrap_or_default(),
        sales_order_id: cell::string_cell(row, export_record::SALES_ORDER_ID).unwrap_or_default(),
        container_no: cell::string_cell(row, export_record::CONTAINER_NO).unwrap_or_default(),
        seal_no: cell::string_cell(row, export_record::SEAL_NO),
        export_date: cell::string_cell(row, export_record::EXPORT_DATE),
        is_finalized: is_finalized_cell(row),
        items: Vec::new(), // item data loads separately from the workbook
    }
}

fn is_finalized_cell(row: &Value) -> bool {
    match cell::cell(row, export_record::STATUS) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == FINALIZED_LITERAL,
        _ => false,
    }
}

/// Normalize stuffing-list item rows: the packing-item layout extended with
/// the carton-range allocation columns.
pub fn normalize_stuffing_items(payload: &Value) -> Vec<StuffingListItem> {
    cell::rows(payload)
        .iter()
        .map(|row| StuffingListItem {
            item: normalize_item_row(row),
            carton_start: cell::u32_cell(row, stuffing_item::CARTON_START),
            carton_end: cell::u32_cell(row, stuffing_item::CARTON_END),
        })
        .collect()
}

/// Re-serialize a stuffing list to its positional export-row shape.
pub fn to_export_row(list: &StuffingList) -> Vec<Value> {
    vec![
        json!(list.id),
        json!(list.invoice_no),
        json!(list.sales_order_id),
        json!(list.container_no),
        json!(list.seal_no.clone().unwrap_or_default()),
        json!(list.export_date.clone().unwrap_or_default()),
        if list.is_finalized {
            json!(FINALIZED_LITERAL)
        } else {
            json!("")
        },
    ]
}
