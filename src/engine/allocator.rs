// ==========================================
// Luggage Fulfillment Tracking - Invoice Allocator
// ==========================================
// Aggregation over allocation lines for one (brand, invoice) query. The
// backend emits lines in FIFO ledger order (export date asc, then source
// column position); this layer sums and classifies, it never re-sorts and
// never re-derives readiness.
// ==========================================

use crate::domain::invoice::{InvoiceAllocation, InvoiceCheckResult};

/// Plain sum of line quantities. Rework was already subtracted upstream
/// when each QTY was computed, so no weighting happens here.
pub fn total_qty(rows: &[InvoiceCheckResult]) -> u64 {
    rows.iter().map(|row| row.qty).sum()
}

/// Assemble the aggregate the Invoice Checker displays. Row order is kept
/// exactly as received.
pub fn aggregate(brand: &str, invoice: &str, rows: Vec<InvoiceCheckResult>) -> InvoiceAllocation {
    let total = total_qty(&rows);
    InvoiceAllocation {
        brand: brand.to_string(),
        invoice: invoice.to_string(),
        rows,
        total_qty: total,
    }
}
