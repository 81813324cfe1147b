// ==========================================
// Luggage Fulfillment Tracking - Domain Model Layer
// ==========================================
// Entities are read-only projections of the external spreadsheet: created
// fresh on every fetch, held for the duration of a view, then discarded.
// No data access, no derivation logic here.
// ==========================================

pub mod dashboard;
pub mod document;
pub mod invoice;
pub mod sales_order;
pub mod stuffing;
pub mod types;

// Re-export core types
pub use dashboard::{
    ProductionFigure, ProductionOverview, FIGURE_PRODUCED, FIGURE_REMAINING, FIGURE_REWORK,
};
pub use document::{DriveFile, SyncAck};
pub use invoice::{InvoiceAllocation, InvoiceCheckResult};
pub use sales_order::{PackingListSheet, SalesOrder, SalesOrderItem};
pub use stuffing::{StuffingList, StuffingListItem};
pub use types::{OrderStatus, QtyStatus};
