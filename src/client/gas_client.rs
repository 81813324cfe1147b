// ==========================================
// Luggage Fulfillment Tracking - Apps Script Client
// ==========================================
// Production SheetClient over HTTPS. The deployment serves every action on
// one URL, discriminated by query string. A millisecond `_t` parameter
// defeats the script host's response cache.
// ==========================================

use crate::client::error::{ClientError, ClientResult};
use crate::client::sheet_client::{Action, SheetClient, WorkbookKind};
use crate::config::ClientConfig;
use crate::domain::document::SyncAck;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

// ==========================================
// GasClient
// ==========================================
pub struct GasClient {
    http: reqwest::Client,
    base_url: String,
}

impl GasClient {
    /// Build a client from endpoint configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Cache-busting timestamp parameter.
    fn cache_buster() -> String {
        Utc::now().timestamp_millis().to_string()
    }
}

/// The script reports its own failures as `{"error": "..."}` with HTTP 200.
pub(crate) fn provider_error(payload: &Value) -> Option<String> {
    let err = payload.as_object()?.get("error")?;
    Some(match err {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

#[async_trait]
impl SheetClient for GasClient {
    async fn fetch_rows(&self, action: Action, params: &[(&str, &str)]) -> ClientResult<Value> {
        let buster = Self::cache_buster();
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        query.push(("action", action.as_str()));
        query.extend_from_slice(params);
        query.push(("_t", buster.as_str()));

        debug!(action = %action, "querying spreadsheet endpoint");
        let response = self.http.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(action = %action, status = status.as_u16(), "spreadsheet endpoint returned non-OK status");
            return Err(ClientError::EndpointStatus {
                status: status.as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        if let Some(message) = provider_error(&payload) {
            warn!(action = %action, %message, "provider reported an error payload");
            return Err(ClientError::Provider(message));
        }

        Ok(payload)
    }

    async fn sync_workbook(
        &self,
        kind: WorkbookKind,
        file_name: &str,
        content: Vec<u8>,
    ) -> ClientResult<SyncAck> {
        let buster = Self::cache_buster();
        let query = [
            ("action", kind.as_action_str()),
            ("filename", file_name),
            ("_t", buster.as_str()),
        ];

        debug!(
            action = kind.as_action_str(),
            file_name,
            bytes = content.len(),
            "uploading workbook to provider"
        );
        let response = self
            .http
            .post(&self.base_url)
            .query(&query)
            .body(content)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                action = kind.as_action_str(),
                status = status.as_u16(),
                "workbook sync returned non-OK status"
            );
            return Err(ClientError::EndpointStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<SyncAck>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
