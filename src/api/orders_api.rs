// ==========================================
// Luggage Fulfillment Tracking - Orders API
// ==========================================
// Sales-order index and export-record queries for the master-data views.
// Composes client fetch -> normalization -> export-linkage derivation.
// ==========================================

use crate::api::error::ApiResult;
use crate::client::{Action, SheetClient};
use crate::domain::sales_order::SalesOrder;
use crate::domain::stuffing::StuffingList;
use crate::engine::status::apply_export_linkage;
use crate::normalizer::{normalize_sales_orders, normalize_stuffing_lists};
use std::sync::Arc;
use tracing::info;

// ==========================================
// OrdersApi
// ==========================================
pub struct OrdersApi {
    client: Arc<dyn SheetClient>,
}

impl OrdersApi {
    pub fn new(client: Arc<dyn SheetClient>) -> Self {
        Self { client }
    }

    /// Fetch the sales-order index with each row's stored status literal.
    pub async fn list_sales_orders(&self) -> ApiResult<Vec<SalesOrder>> {
        let payload = self.client.fetch_rows(Action::GetIndex, &[]).await?;
        let orders = normalize_sales_orders(&payload);
        info!(count = orders.len(), "fetched sales-order index");
        Ok(orders)
    }

    /// Fetch the export/stuffing records.
    pub async fn list_stuffing_lists(&self) -> ApiResult<Vec<StuffingList>> {
        let payload = self.client.fetch_rows(Action::GetExports, &[]).await?;
        let lists = normalize_stuffing_lists(&payload);
        info!(count = lists.len(), "fetched stuffing lists");
        Ok(lists)
    }

    /// Fetch both sources and upgrade orders linked to a finalized export
    /// to their terminal Exported status. Index and exports are fetched
    /// concurrently; a failure of either fails the query.
    pub async fn list_sales_orders_with_export_status(&self) -> ApiResult<Vec<SalesOrder>> {
        let (index_payload, exports_payload) = tokio::try_join!(
            self.client.fetch_rows(Action::GetIndex, &[]),
            self.client.fetch_rows(Action::GetExports, &[])
        )?;

        let mut orders = normalize_sales_orders(&index_payload);
        let stuffing_lists = normalize_stuffing_lists(&exports_payload);
        apply_export_linkage(&mut orders, &stuffing_lists);

        info!(
            orders = orders.len(),
            exports = stuffing_lists.len(),
            "reconciled export linkage"
        );
        Ok(orders)
    }
}
