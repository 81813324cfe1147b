// ==========================================
// Luggage Fulfillment Tracking - Generated Documents
// ==========================================
// Packing/stuffing workbooks generated into Drive folders. Listing and
// download delivery belong to the external provider; these are the shapes
// it returns.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DriveFile
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub download_url: String,
    pub updated: String, // provider-formatted timestamp, displayed as-is
}

// ==========================================
// SyncAck
// ==========================================
// Acknowledgment for workbook upload/sync endpoints. The workbook itself is
// parsed by the provider, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncAck {
    pub success: bool,
    pub message: String,
}
