// ==========================================
// Luggage Fulfillment Tracking - Dashboard API
// ==========================================
// Aggregate production counters for the dashboard header and charts.
// Transport failure stays a typed error; the baseline figure set is an
// explicit opt-in, never a silent substitution.
// ==========================================

use crate::api::error::ApiResult;
use crate::client::{Action, SheetClient};
use crate::domain::dashboard::{ProductionFigure, ProductionOverview};
use crate::engine::status::production_overview;
use crate::normalizer::normalize_production_figures;
use std::sync::Arc;
use tracing::warn;

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi {
    client: Arc<dyn SheetClient>,
}

impl DashboardApi {
    pub fn new(client: Arc<dyn SheetClient>) -> Self {
        Self { client }
    }

    /// Fetch the raw counter figures.
    pub async fn production_figures(&self) -> ApiResult<Vec<ProductionFigure>> {
        let payload = self.client.fetch_rows(Action::GetDashboard, &[]).await?;
        Ok(normalize_production_figures(&payload))
    }

    /// Fetch and derive the dashboard header aggregates.
    pub async fn production_overview(&self) -> ApiResult<ProductionOverview> {
        let figures = self.production_figures().await?;
        Ok(production_overview(&figures))
    }

    /// Figures for views that prefer rendering the baseline set over an
    /// empty chart while the provider is unreachable. The failure is logged
    /// but deliberately not surfaced here.
    pub async fn production_figures_or_baseline(&self) -> Vec<ProductionFigure> {
        match self.production_figures().await {
            Ok(figures) if !figures.is_empty() => figures,
            Ok(_) => ProductionFigure::baseline(),
            Err(err) => {
                warn!(%err, "dashboard fetch failed, serving baseline figures");
                ProductionFigure::baseline()
            }
        }
    }
}
