// ==========================================
// Luggage Fulfillment Tracking - Sheet Client Trait
// ==========================================
// The single query-style boundary to the external data provider,
// parameterized by an action discriminator. Implementations: GasClient
// (production HTTPS), mock clients in tests. Consumers receive this as an
// injected Arc<dyn SheetClient>, never a global singleton.
// ==========================================

use crate::client::error::ClientResult;
use crate::domain::document::SyncAck;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

// ==========================================
// Action - query discriminator
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GetIndex,         // sales orders
    GetExports,       // stuffing lists
    GetFilesByFolder, // generated document listing (param: folderId)
    GetDashboard,     // aggregate production counters
    CheckInvoice,     // invoice allocation (params: brand, invoice)
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetIndex => "get_index",
            Action::GetExports => "get_exports",
            Action::GetFilesByFolder => "get_files_by_folder",
            Action::GetDashboard => "get_dashboard",
            Action::CheckInvoice => "check_invoice",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// WorkbookKind - upload/sync discriminator
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookKind {
    LogicSheet,  // master-sheet backup for the invoice checker
    PackingList, // packing-list workbook upload
}

impl WorkbookKind {
    pub fn as_action_str(&self) -> &'static str {
        match self {
            WorkbookKind::LogicSheet => "sync_logic",
            WorkbookKind::PackingList => "sync_packing",
        }
    }
}

// ==========================================
// SheetClient Trait
// ==========================================
#[async_trait]
pub trait SheetClient: Send + Sync {
    /// Run one query action against the provider.
    ///
    /// # Arguments
    /// - action: query discriminator
    /// - params: free-form string parameters (e.g. brand/invoice/folderId)
    ///
    /// # Returns
    /// - Ok(Value): the raw payload, normally a JSON array of rows. Callers
    ///   hand it to the Row Normalizer; a non-array payload normalizes to an
    ///   empty entity sequence.
    /// - Err(ClientError): transport failure, non-OK status, undecodable
    ///   body, or a provider error sentinel.
    async fn fetch_rows(&self, action: Action, params: &[(&str, &str)]) -> ClientResult<Value>;

    /// Ship a workbook to the provider for parsing on its side.
    ///
    /// # Arguments
    /// - kind: which sync endpoint receives the file
    /// - file_name: original workbook file name
    /// - content: raw workbook bytes (never parsed locally)
    ///
    /// # Returns
    /// - Ok(SyncAck): provider acknowledgment
    /// - Err(ClientError): transport or decode failure
    async fn sync_workbook(
        &self,
        kind: WorkbookKind,
        file_name: &str,
        content: Vec<u8>,
    ) -> ClientResult<SyncAck>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_discriminators() {
        assert_eq!(Action::GetIndex.as_str(), "get_index");
        assert_eq!(Action::GetExports.as_str(), "get_exports");
        assert_eq!(Action::GetFilesByFolder.as_str(), "get_files_by_folder");
        assert_eq!(Action::GetDashboard.as_str(), "get_dashboard");
        assert_eq!(Action::CheckInvoice.as_str(), "check_invoice");
    }

    #[test]
    fn test_workbook_kind_discriminators() {
        assert_eq!(WorkbookKind::LogicSheet.as_action_str(), "sync_logic");
        assert_eq!(WorkbookKind::PackingList.as_action_str(), "sync_packing");
    }
}
