// ==========================================
// Luggage Fulfillment Tracking - Column Contracts
// ==========================================
// Fixed positional index contracts per row kind, and the documented
// defaults for absent/non-coercible cells. The mapping to the source sheets
// lives here and nowhere else.
// ==========================================

/// Sales-order index rows (`get_index`, sheet ExpSched).
pub mod order_index {
    pub const ID: usize = 0;
    pub const SO_NUMBER: usize = 1;
    pub const BRAND: usize = 2;
    pub const CUSTOMER_POS: usize = 3; // comma-joined PO codes
    pub const STATUS: usize = 4;
    pub const IMPORTED_AT: usize = 5;
}

/// Export/stuffing rows (`get_exports`, sheet ShippingRecord).
pub mod export_record {
    pub const ID: usize = 0;
    pub const INVOICE_NO: usize = 1;
    pub const SALES_ORDER_ID: usize = 2;
    pub const CONTAINER_NO: usize = 3;
    pub const SEAL_NO: usize = 4;
    pub const EXPORT_DATE: usize = 5;
    pub const STATUS: usize = 6; // "Shipped" literal or raw boolean true
}

/// Packing-list item rows (workbook tab, columns B..H).
pub mod packing_item {
    pub const MATERIAL_NO: usize = 1; // Col B
    pub const NAME_SPEC: usize = 2; // Col C
    pub const PCS_PER_CTN: usize = 3; // Col D
    pub const TOTAL_CTNS: usize = 4; // Col E
    pub const COLOR: usize = 5; // Col F
    pub const ULI_PO: usize = 7; // Col H
}

/// Stuffing-list item rows: packing-item layout plus the carton range.
pub mod stuffing_item {
    pub const CARTON_START: usize = 8; // Col I
    pub const CARTON_END: usize = 9; // Col J
}

/// Dashboard counter rows (`get_dashboard`).
pub mod dashboard_figure {
    pub const NAME: usize = 0;
    pub const VALUE: usize = 1;
    pub const FILL: usize = 2;
}

// ===== Documented defaults =====

/// Absent SO number.
pub const DEFAULT_SO_NUMBER: &str = "TBA";
/// Absent or unmatched brand.
pub const DEFAULT_BRAND: &str = "UNKNOWN";
/// Index rows carry no filename; the index itself is the source.
pub const INDEX_SOURCE_FILENAME: &str = "Sourced from ExpSched";
/// Export status literal that finalizes a stuffing list.
pub const FINALIZED_LITERAL: &str = "Shipped";
/// Absent chart color on a dashboard figure.
pub const DEFAULT_FIGURE_FILL: &str = "#cccccc";
