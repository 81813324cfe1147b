// ==========================================
// Luggage Fulfillment Tracking - Domain Types
// ==========================================
// Source literals come from the ExpSched / ShippingRecord sheets and the
// invoice master sheet. Serialized forms must match them exactly.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Order Status (Sales Order lifecycle)
// ==========================================
// Monotonic across the production lifecycle, declaration order is the
// lifecycle order: SoonProduced < InProduction < FinishedProduced < Exported.
// Exported is terminal (requires a finalized stuffing-list linkage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Soon Produced")]
    SoonProduced, // no production recorded
    #[serde(rename = "In Production")]
    InProduction, // partial production
    #[serde(rename = "Finished Produced")]
    FinishedProduced, // produced == order
    #[serde(rename = "Exported")]
    Exported, // linked to a finalized stuffing list
}

impl OrderStatus {
    /// Parse the status literal stored per row in the index sheet.
    ///
    /// # Returns
    /// - Some(OrderStatus): recognized literal
    /// - None: absent or unrecognized (caller applies the documented default)
    pub fn from_source_literal(value: &str) -> Option<Self> {
        match value {
            "Soon Produced" => Some(OrderStatus::SoonProduced),
            "In Production" => Some(OrderStatus::InProduction),
            "Finished Produced" => Some(OrderStatus::FinishedProduced),
            "Exported" => Some(OrderStatus::Exported),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::SoonProduced => write!(f, "Soon Produced"),
            OrderStatus::InProduction => write!(f, "In Production"),
            OrderStatus::FinishedProduced => write!(f, "Finished Produced"),
            OrderStatus::Exported => write!(f, "Exported"),
        }
    }
}

// ==========================================
// Quantity Readiness (invoice allocation)
// ==========================================
// Computed upstream by the master-sheet script (available = produced - rework
// attributed to the invoice, compared against requested QTY). The core trusts
// the literal and never re-derives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QtyStatus {
    #[serde(rename = "READY")]
    Ready,
    #[serde(rename = "NOT READY")]
    NotReady,
}

impl QtyStatus {
    /// Parse the readiness literal. Unrecognized values fail closed.
    pub fn from_source_literal(value: &str) -> Self {
        match value {
            "READY" => QtyStatus::Ready,
            _ => QtyStatus::NotReady,
        }
    }
}

impl fmt::Display for QtyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QtyStatus::Ready => write!(f, "READY"),
            QtyStatus::NotReady => write!(f, "NOT READY"),
        }
    }
}
