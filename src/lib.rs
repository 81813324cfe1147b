// ==========================================
// Luggage Fulfillment Tracking - Core Library
// ==========================================
// Reconciliation core for the production-tracking dashboard: sales orders,
// export/stuffing status, invoice allocation. The spreadsheet endpoint is
// the system of record; everything here is a typed, per-fetch projection.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Client layer - external provider boundary
pub mod client;

// Normalizer layer - raw rows to typed entities
pub mod normalizer;

// Engine layer - derivation and aggregation rules
pub mod engine;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// API layer - view-facing operations
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{OrderStatus, QtyStatus};

// Domain entities
pub use domain::{
    DriveFile, InvoiceAllocation, InvoiceCheckResult, PackingListSheet, ProductionFigure,
    ProductionOverview, SalesOrder, SalesOrderItem, StuffingList, StuffingListItem, SyncAck,
};

// Client
pub use client::{Action, ClientError, ClientResult, GasClient, SheetClient, WorkbookKind};

// API
pub use api::{
    ApiError, ApiResult, DashboardApi, DocumentsApi, InvoiceApi, OrdersApi, QueryGuard,
};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Display name
pub const APP_NAME: &str = "Luggage Fulfillment Tracker";
