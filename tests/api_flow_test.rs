// ==========================================
// API layer integration tests
// ==========================================
// Orders, dashboard, documents, and the stale-response guard, against the
// injected mock client.
// ==========================================

mod test_helpers;

use luggage_fulfillment::api::{
    filter_files_by_name, ApiError, DashboardApi, DocumentsApi, OrdersApi, QueryGuard,
};
use luggage_fulfillment::client::Action;
use luggage_fulfillment::domain::types::OrderStatus;
use std::sync::Arc;
use test_helpers::MockSheetClient;

#[tokio::test]
async fn test_orders_with_export_status() {
    let client = Arc::new(
        MockSheetClient::new()
            .with_payload(Action::GetIndex, test_helpers::index_payload())
            .with_payload(Action::GetExports, test_helpers::exports_payload()),
    );
    let api = OrdersApi::new(client);

    let orders = api.list_sales_orders_with_export_status().await.unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].status, OrderStatus::Exported);
    assert_eq!(orders[1].status, OrderStatus::InProduction);
}

#[tokio::test]
async fn test_orders_transport_failure_surfaces_as_error() {
    let client = Arc::new(MockSheetClient::new().with_transport_failure(Action::GetIndex));
    let api = OrdersApi::new(client);

    let err = api.list_sales_orders().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_dashboard_overview() {
    let client = Arc::new(
        MockSheetClient::new().with_payload(Action::GetDashboard, test_helpers::dashboard_payload()),
    );
    let api = DashboardApi::new(client);

    let overview = api.production_overview().await.unwrap();
    assert_eq!(overview.produced, 8450);
    assert_eq!(overview.remaining, 3120);
    assert_eq!(overview.rework, 145);
    assert_eq!(overview.order_total, 11570);
    assert_eq!(overview.completion_rate, 73);
}

#[tokio::test]
async fn test_dashboard_baseline_only_on_explicit_fallback_path() {
    let client = Arc::new(MockSheetClient::new().with_transport_failure(Action::GetDashboard));
    let api = DashboardApi::new(client);

    // the strict path reports the failure
    assert!(api.production_overview().await.is_err());

    // the opt-in path serves the baseline set
    let figures = api.production_figures_or_baseline().await;
    assert_eq!(figures.len(), 3);
    assert_eq!(figures[0].name, "Produced");
    assert_eq!(figures[0].value, 8450);
}

#[tokio::test]
async fn test_documents_listing_and_search() {
    let client = Arc::new(
        MockSheetClient::new()
            .with_payload(Action::GetFilesByFolder, test_helpers::drive_files_payload()),
    );
    let api = DocumentsApi::new(client.clone());

    let files = api.list_packing_documents("AWAY").await.unwrap();
    assert_eq!(files.len(), 2);
    // the registry folder id travels as the folderId parameter
    assert_eq!(
        client.recorded_calls(),
        vec!["get_files_by_folder?folderId=1y2EF3y6Bx_KFFFgpkeuXKWqcGADKqWln"]
    );

    let hits = filter_files_by_name(&files, "so-2208");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "AWAY SO-2208.xlsx");
}

#[tokio::test]
async fn test_unknown_brand_fails_validation_without_network_call() {
    let client = Arc::new(MockSheetClient::new());
    let api = DocumentsApi::new(client.clone());

    let err = api.list_packing_documents("SAMSONITE").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_workbook_sync_acknowledgment() {
    let client = Arc::new(MockSheetClient::new());
    let api = DocumentsApi::new(client.clone());

    let ack = api
        .sync_master_sheet("master-backup.xlsx", vec![0x50, 0x4b])
        .await
        .unwrap();
    assert!(ack.success);
    assert_eq!(
        client.recorded_calls(),
        vec!["sync_logic?filename=master-backup.xlsx"]
    );
}

#[tokio::test]
async fn test_stale_invoice_response_is_discarded() {
    let guard: QueryGuard<(String, String)> = QueryGuard::new();

    let first = ("AWAY".to_string(), "INV-1".to_string());
    let second = ("AWAY".to_string(), "INV-2".to_string());

    guard.begin(first.clone());
    // the user searches again before the first response lands
    guard.begin(second.clone());

    assert_eq!(guard.accept(&first, 350u64), None);
    assert_eq!(guard.accept(&second, 120u64), Some(120));
}
