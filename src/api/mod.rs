// ==========================================
// Luggage Fulfillment Tracking - API Layer
// ==========================================
// View-facing operations: client fetch -> normalization -> derivation,
// with the caller-facing error taxonomy. No rendering concerns.
// ==========================================

pub mod dashboard_api;
pub mod documents_api;
pub mod error;
pub mod invoice_api;
pub mod orders_api;
pub mod query_guard;

pub use dashboard_api::DashboardApi;
pub use documents_api::{filter_files_by_name, DocumentsApi};
pub use error::{ApiError, ApiResult};
pub use invoice_api::{InvoiceApi, INPUT_REQUIRED_MESSAGE};
pub use orders_api::OrdersApi;
pub use query_guard::QueryGuard;
