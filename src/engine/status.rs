// ==========================================
// Luggage Fulfillment Tracking - Status Deriver
// ==========================================
// Sales-order lifecycle stage from produced/remaining quantities and the
// export linkage fact. Pure functions; the stored per-row status literal is
// used in the common case, these rules apply when recomputing locally.
// ==========================================

use crate::domain::dashboard::{
    ProductionFigure, ProductionOverview, FIGURE_PRODUCED, FIGURE_REMAINING, FIGURE_REWORK,
};
use crate::domain::sales_order::SalesOrder;
use crate::domain::stuffing::StuffingList;
use crate::domain::types::OrderStatus;
use std::collections::HashSet;

/// Whole-percent completion: round(produced / (produced + remaining) * 100).
/// Saturates cleanly at the empty-order boundary: no order quantity -> 0%.
pub fn completion_rate(produced: u64, remaining: u64) -> u8 {
    let order_total = produced + remaining;
    if order_total == 0 {
        return 0;
    }
    ((produced as f64 / order_total as f64) * 100.0).round() as u8
}

/// Derive the lifecycle stage.
///
/// The export linkage is checked before any quantity classification:
/// a finalized export is terminal, and quantities alone cannot detect it —
/// production figures corrected downward after shipment must never regress
/// the status.
pub fn derive_status(produced: u64, order_total: u64, has_finalized_export: bool) -> OrderStatus {
    if has_finalized_export {
        return OrderStatus::Exported;
    }
    if produced == 0 {
        OrderStatus::SoonProduced
    } else if order_total > 0 && produced >= order_total {
        OrderStatus::FinishedProduced
    } else {
        OrderStatus::InProduction
    }
}

/// Upgrade each order linked to a finalized stuffing list to Exported.
/// One-directional: nothing here ever moves a status backwards.
pub fn apply_export_linkage(orders: &mut [SalesOrder], stuffing_lists: &[StuffingList]) {
    let finalized: HashSet<&str> = stuffing_lists
        .iter()
        .filter(|list| list.is_finalized)
        .map(|list| list.sales_order_id.as_str())
        .collect();

    for order in orders.iter_mut() {
        if finalized.contains(order.id.as_str()) {
            order.status = OrderStatus::Exported;
        }
    }
}

/// Dashboard header aggregates from the named counter figures. A figure the
/// payload lacks counts as 0.
pub fn production_overview(figures: &[ProductionFigure]) -> ProductionOverview {
    let value_of = |name: &str| {
        figures
            .iter()
            .find(|figure| figure.name == name)
            .map(|figure| figure.value)
            .unwrap_or(0)
    };

    let produced = value_of(FIGURE_PRODUCED);
    let remaining = value_of(FIGURE_REMAINING);
    let rework = value_of(FIGURE_REWORK);

    ProductionOverview {
        produced,
        remaining,
        rework,
        order_total: produced + remaining,
        completion_rate: completion_rate(produced, remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(id: &str, status: OrderStatus) -> SalesOrder {
        SalesOrder {
            id: id.to_string(),
            so_number: format!("SO-{}", id),
            brand: "AWAY".to_string(),
            customer_pos: vec![],
            status,
            source_filename: String::new(),
            imported_at: Utc::now(),
            sheets: vec![],
        }
    }

    fn stuffing(sales_order_id: &str, is_finalized: bool) -> StuffingList {
        StuffingList {
            id: format!("exp-{}", sales_order_id),
            invoice_no: "INV-1".to_string(),
            sales_order_id: sales_order_id.to_string(),
            container_no: String::new(),
            seal_no: None,
            export_date: None,
            is_finalized,
            items: vec![],
        }
    }

    #[test]
    fn test_completion_rate_boundaries() {
        assert_eq!(completion_rate(0, 0), 0); // no division error
        assert_eq!(completion_rate(10, 0), 100);
        assert_eq!(completion_rate(5, 5), 50);
        assert_eq!(completion_rate(0, 7), 0);
    }

    #[test]
    fn test_completion_rate_rounds() {
        assert_eq!(completion_rate(1, 2), 33);
        assert_eq!(completion_rate(2, 1), 67);
    }

    #[test]
    fn test_derive_status_lifecycle() {
        assert_eq!(derive_status(0, 100, false), OrderStatus::SoonProduced);
        assert_eq!(derive_status(40, 100, false), OrderStatus::InProduction);
        assert_eq!(derive_status(100, 100, false), OrderStatus::FinishedProduced);
        assert_eq!(derive_status(100, 100, true), OrderStatus::Exported);
    }

    #[test]
    fn test_export_is_terminal_despite_corrected_figures() {
        // production corrected downward after the container shipped
        assert_eq!(derive_status(60, 100, true), OrderStatus::Exported);
        assert_eq!(derive_status(0, 100, true), OrderStatus::Exported);
    }

    #[test]
    fn test_empty_order_edge() {
        assert_eq!(derive_status(0, 0, false), OrderStatus::SoonProduced);
    }

    #[test]
    fn test_apply_export_linkage_upgrades_only_linked_finalized() {
        let mut orders = vec![
            order("so-1", OrderStatus::InProduction),
            order("so-2", OrderStatus::FinishedProduced),
            order("so-3", OrderStatus::SoonProduced),
        ];
        let lists = vec![
            stuffing("so-1", true),
            stuffing("so-2", false), // open export does not finalize
        ];

        apply_export_linkage(&mut orders, &lists);

        assert_eq!(orders[0].status, OrderStatus::Exported);
        assert_eq!(orders[1].status, OrderStatus::FinishedProduced);
        assert_eq!(orders[2].status, OrderStatus::SoonProduced);
    }

    #[test]
    fn test_production_overview_from_figures() {
        let figures = vec![
            ProductionFigure {
                name: "Produced".to_string(),
                value: 8450,
                fill: "#0ea5e9".to_string(),
            },
            ProductionFigure {
                name: "Remaining".to_string(),
                value: 3120,
                fill: "#e2e8f0".to_string(),
            },
            ProductionFigure {
                name: "Rework".to_string(),
                value: 145,
                fill: "#ef4444".to_string(),
            },
        ];
        let overview = production_overview(&figures);
        assert_eq!(overview.order_total, 11570);
        assert_eq!(overview.rework, 145);
        assert_eq!(overview.completion_rate, 73);
    }

    #[test]
    fn test_production_overview_missing_figures_count_zero() {
        let overview = production_overview(&[]);
        assert_eq!(overview.produced, 0);
        assert_eq!(overview.order_total, 0);
        assert_eq!(overview.completion_rate, 0);
    }
}
