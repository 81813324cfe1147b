// ==========================================
// Luggage Fulfillment Tracking - Dashboard Figures
// ==========================================
// Aggregate production counters from the "IN" sheet: Produced (Col J),
// Rework (Col N), Remaining (ExpSched - IN).
// ==========================================

use serde::{Deserialize, Serialize};

/// Figure name literals used by the dashboard sheet.
pub const FIGURE_PRODUCED: &str = "Produced";
pub const FIGURE_REMAINING: &str = "Remaining";
pub const FIGURE_REWORK: &str = "Rework";

// ==========================================
// ProductionFigure
// ==========================================
// One counter row as the endpoint returns it: [name, value, fill].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionFigure {
    pub name: String,
    pub value: u64,
    pub fill: String, // chart color hint, passed through to the view
}

impl ProductionFigure {
    /// Baseline figures for callers that want to render something while the
    /// provider is unreachable. Opt-in only: the fetch path itself reports
    /// transport failure as a typed error.
    pub fn baseline() -> Vec<ProductionFigure> {
        vec![
            ProductionFigure {
                name: FIGURE_PRODUCED.to_string(),
                value: 8450,
                fill: "#0ea5e9".to_string(),
            },
            ProductionFigure {
                name: FIGURE_REMAINING.to_string(),
                value: 3120,
                fill: "#e2e8f0".to_string(),
            },
            ProductionFigure {
                name: FIGURE_REWORK.to_string(),
                value: 145,
                fill: "#ef4444".to_string(),
            },
        ]
    }
}

// ==========================================
// ProductionOverview
// ==========================================
// Derived dashboard header: order_total = produced + remaining, completion
// rate saturates to 0 when there is no order quantity at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOverview {
    pub produced: u64,
    pub remaining: u64,
    pub rework: u64,
    pub order_total: u64,
    pub completion_rate: u8, // whole percent, 0..=100
}
