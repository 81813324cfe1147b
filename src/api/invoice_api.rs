// ==========================================
// Luggage Fulfillment Tracking - Invoice Checker API
// ==========================================
// The (brand, invoice) allocation query. Inputs are trimmed and validated
// before any network call; an empty allocation is a valid Ok outcome that
// carries its own not-found message.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::client::{Action, SheetClient};
use crate::domain::invoice::InvoiceAllocation;
use crate::engine::allocator;
use crate::normalizer::normalize_invoice_rows;
use std::sync::Arc;
use tracing::info;

/// Validation message shown when either input is blank.
pub const INPUT_REQUIRED_MESSAGE: &str = "Brand and Invoice number are required.";

// ==========================================
// InvoiceApi
// ==========================================
pub struct InvoiceApi {
    client: Arc<dyn SheetClient>,
}

impl InvoiceApi {
    pub fn new(client: Arc<dyn SheetClient>) -> Self {
        Self { client }
    }

    /// Run the allocation query.
    ///
    /// # Returns
    /// - Ok(InvoiceAllocation): rows in the backend's FIFO ledger order plus
    ///   the plain-sum total; empty rows mean "not found", not an error.
    /// - Err(ApiError::InvalidInput): blank brand or invoice, raised before
    ///   the provider is contacted.
    /// - Err(ApiError::Transport): the provider could not be queried.
    pub async fn check_invoice(&self, brand: &str, invoice: &str) -> ApiResult<InvoiceAllocation> {
        let brand = brand.trim();
        let invoice = invoice.trim();
        if brand.is_empty() || invoice.is_empty() {
            return Err(ApiError::InvalidInput(INPUT_REQUIRED_MESSAGE.to_string()));
        }

        let payload = self
            .client
            .fetch_rows(
                Action::CheckInvoice,
                &[("brand", brand), ("invoice", invoice)],
            )
            .await?;

        let rows = normalize_invoice_rows(&payload);
        let allocation = allocator::aggregate(brand, invoice, rows);
        if allocation.is_empty() {
            info!(brand, invoice, "invoice not found in the master sheet");
        } else {
            info!(
                brand,
                invoice,
                lines = allocation.rows.len(),
                total_qty = allocation.total_qty,
                "invoice allocation fetched"
            );
        }
        Ok(allocation)
    }
}
