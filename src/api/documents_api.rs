// ==========================================
// Luggage Fulfillment Tracking - Documents API
// ==========================================
// Generated packing/stuffing workbook browsing and workbook sync. File
// content is never parsed here; download delivery and parsing belong to
// the provider.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::client::{Action, SheetClient, WorkbookKind};
use crate::config::{folder_for_brand, STUFFING_FOLDER};
use crate::domain::document::{DriveFile, SyncAck};
use crate::normalizer::normalize_drive_files;
use std::sync::Arc;
use tracing::info;

// ==========================================
// DocumentsApi
// ==========================================
pub struct DocumentsApi {
    client: Arc<dyn SheetClient>,
}

impl DocumentsApi {
    pub fn new(client: Arc<dyn SheetClient>) -> Self {
        Self { client }
    }

    /// List a brand's generated packing lists. Unregistered brands fail
    /// validation before the provider is contacted.
    pub async fn list_packing_documents(&self, brand: &str) -> ApiResult<Vec<DriveFile>> {
        let folder_id = folder_for_brand(brand)
            .ok_or_else(|| ApiError::InvalidInput(format!("unknown brand: {}", brand.trim())))?;
        self.list_folder(folder_id).await
    }

    /// List the shared finalized stuffing-list folder.
    pub async fn list_stuffing_documents(&self) -> ApiResult<Vec<DriveFile>> {
        self.list_folder(STUFFING_FOLDER).await
    }

    async fn list_folder(&self, folder_id: &str) -> ApiResult<Vec<DriveFile>> {
        let payload = self
            .client
            .fetch_rows(Action::GetFilesByFolder, &[("folderId", folder_id)])
            .await?;
        let files = normalize_drive_files(&payload);
        info!(folder_id, count = files.len(), "listed drive folder");
        Ok(files)
    }

    /// Ship the invoice-checker master sheet backup to the provider.
    pub async fn sync_master_sheet(&self, file_name: &str, content: Vec<u8>) -> ApiResult<SyncAck> {
        let ack = self
            .client
            .sync_workbook(WorkbookKind::LogicSheet, file_name, content)
            .await?;
        info!(file_name, success = ack.success, "master sheet sync acknowledged");
        Ok(ack)
    }

    /// Ship a packing-list workbook to the provider for parsing.
    pub async fn upload_packing_list(&self, file_name: &str, content: Vec<u8>) -> ApiResult<SyncAck> {
        let ack = self
            .client
            .sync_workbook(WorkbookKind::PackingList, file_name, content)
            .await?;
        info!(file_name, success = ack.success, "packing list upload acknowledged");
        Ok(ack)
    }
}

/// Case-insensitive filename filter over a fetched listing. An empty query
/// matches everything.
pub fn filter_files_by_name<'a>(files: &'a [DriveFile], query: &str) -> Vec<&'a DriveFile> {
    let needle = query.trim().to_lowercase();
    files
        .iter()
        .filter(|file| needle.is_empty() || file.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> DriveFile {
        DriveFile {
            id: "f".to_string(),
            name: name.to_string(),
            download_url: String::new(),
            updated: String::new(),
        }
    }

    #[test]
    fn test_filename_filter() {
        let files = vec![
            file("AWAY SO-2207.xlsx"),
            file("TUMI SO-1180.xlsx"),
            file("away so-2311.xlsx"),
        ];
        let hits = filter_files_by_name(&files, "away");
        assert_eq!(hits.len(), 2);

        let all = filter_files_by_name(&files, "  ");
        assert_eq!(all.len(), 3);

        assert!(filter_files_by_name(&files, "LOJEL").is_empty());
    }
}
