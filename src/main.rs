// ==========================================
// Luggage Fulfillment Tracking - Staff Console
// ==========================================
// Terminal utility for running the dashboard queries without the web UI:
// production overview, order index, export records, invoice checks,
// document listings.
// ==========================================

use luggage_fulfillment::api::{DashboardApi, DocumentsApi, InvoiceApi, OrdersApi};
use luggage_fulfillment::client::GasClient;
use luggage_fulfillment::config::ClientConfig;
use luggage_fulfillment::logging;
use std::env;
use std::sync::Arc;

const USAGE: &str = "\
Usage: fulfillment-console <command> [args]

Commands:
  dashboard                 production overview (produced/remaining/rework)
  orders                    sales-order index with export linkage applied
  exports                   stuffing/export records
  invoice <brand> <number>  invoice allocation check
  files <brand>             generated packing lists for a brand
  files stuffing            finalized stuffing lists";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let client = Arc::new(GasClient::new(ClientConfig::from_env())?);

    match command.as_str() {
        "dashboard" => {
            let api = DashboardApi::new(client);
            let overview = api.production_overview().await?;
            println!("Produced:        {}", overview.produced);
            println!("Remaining:       {}", overview.remaining);
            println!("Under rework:    {}", overview.rework);
            println!("Order target:    {}", overview.order_total);
            println!("Completion:      {}%", overview.completion_rate);
        }
        "orders" => {
            let api = OrdersApi::new(client);
            let orders = api.list_sales_orders_with_export_status().await?;
            println!("{} sales orders", orders.len());
            for order in orders {
                println!(
                    "  {:<18} {:<16} {:<18} POs: {}",
                    order.brand,
                    order.so_number,
                    order.status.to_string(),
                    order.customer_pos.join(", ")
                );
            }
        }
        "exports" => {
            let api = OrdersApi::new(client);
            let lists = api.list_stuffing_lists().await?;
            println!("{} stuffing lists", lists.len());
            for list in lists {
                println!(
                    "  {:<14} container {:<14} {} {}",
                    list.invoice_no,
                    list.container_no,
                    if list.is_finalized { "Shipped" } else { "Open" },
                    list.export_date.unwrap_or_default()
                );
            }
        }
        "invoice" => {
            let (Some(brand), Some(number)) = (args.get(1), args.get(2)) else {
                anyhow::bail!("usage: fulfillment-console invoice <brand> <number>");
            };
            let api = InvoiceApi::new(client);
            let allocation = api.check_invoice(brand, number).await?;
            if allocation.is_empty() {
                println!("{}", allocation.not_found_message());
            } else {
                for row in &allocation.rows {
                    println!(
                        "  {:<14} {:<20} {:<10} {:>6} pcs  {:<9} {}",
                        row.po, row.item_type, row.color, row.qty, row.qty_status, row.inv_status
                    );
                }
                println!("Total: {} pcs", allocation.total_qty);
            }
        }
        "files" => {
            let Some(target) = args.get(1) else {
                anyhow::bail!("usage: fulfillment-console files <brand|stuffing>");
            };
            let api = DocumentsApi::new(client);
            let files = if target.eq_ignore_ascii_case("stuffing") {
                api.list_stuffing_documents().await?
            } else {
                api.list_packing_documents(target).await?
            };
            println!("{} files", files.len());
            for file in files {
                println!("  {:<40} updated {}", file.name, file.updated);
            }
        }
        _ => {
            println!("{USAGE}");
        }
    }

    Ok(())
}
