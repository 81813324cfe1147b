// ==========================================
// Luggage Fulfillment Tracking - Dashboard & Document Normalizers
// ==========================================
// Counter rows ([name, value, fill]) and drive-file listings.
// ==========================================

use crate::domain::dashboard::ProductionFigure;
use crate::domain::document::DriveFile;
use crate::normalizer::cell;
use crate::normalizer::field_map::{dashboard_figure, DEFAULT_FIGURE_FILL};
use serde_json::Value;

/// Normalize a `get_dashboard` payload into production figures.
pub fn normalize_production_figures(payload: &Value) -> Vec<ProductionFigure> {
    cell::rows(payload)
        .iter()
        .map(|row| ProductionFigure {
            name: cell::string_cell(row, dashboard_figure::NAME).unwrap_or_default(),
            value: cell::u64_cell(row, dashboard_figure::VALUE).unwrap_or(0),
            fill: cell::string_cell(row, dashboard_figure::FILL)
                .unwrap_or_else(|| DEFAULT_FIGURE_FILL.to_string()),
        })
        .collect()
}

/// Normalize a `get_files_by_folder` payload into drive files.
pub fn normalize_drive_files(payload: &Value) -> Vec<DriveFile> {
    cell::rows(payload)
        .iter()
        .map(|row| DriveFile {
            id: cell::string_field(row, "id").unwrap_or_default(),
            name: cell::string_field(row, "name").unwrap_or_default(),
            download_url: cell::string_field(row, "downloadUrl").unwrap_or_default(),
            updated: cell::string_field(row, "updated").unwrap_or_default(),
        })
        .collect()
}
