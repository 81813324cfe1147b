// ==========================================
// Test helpers
// ==========================================
// Mock sheet client with canned per-action payloads and call recording,
// plus realistic payload fixtures.
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use luggage_fulfillment::client::{
    Action, ClientError, ClientResult, SheetClient, WorkbookKind,
};
use luggage_fulfillment::domain::document::SyncAck;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

// ==========================================
// MockSheetClient
// ==========================================

enum Canned {
    Payload(Value),
    TransportFailure,
}

/// Injected in place of GasClient. Unconfigured actions answer with an
/// empty row array; every call is recorded for assertion.
pub struct MockSheetClient {
    responses: HashMap<&'static str, Canned>,
    calls: Mutex<Vec<String>>,
}

impl MockSheetClient {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Canned payload for one action.
    pub fn with_payload(mut self, action: Action, payload: Value) -> Self {
        self.responses.insert(action.as_str(), Canned::Payload(payload));
        self
    }

    /// Simulated connection failure for one action.
    pub fn with_transport_failure(mut self, action: Action) -> Self {
        self.responses.insert(action.as_str(), Canned::TransportFailure);
        self
    }

    /// Number of provider calls issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Recorded calls, `action?k=v&...` per entry.
    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, action: &str, params: &[(&str, &str)]) {
        let mut entry = action.to_string();
        for (i, (key, value)) in params.iter().enumerate() {
            entry.push(if i == 0 { '?' } else { '&' });
            entry.push_str(key);
            entry.push('=');
            entry.push_str(value);
        }
        self.calls.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl SheetClient for MockSheetClient {
    async fn fetch_rows(&self, action: Action, params: &[(&str, &str)]) -> ClientResult<Value> {
        self.record(action.as_str(), params);
        match self.responses.get(action.as_str()) {
            Some(Canned::Payload(payload)) => Ok(payload.clone()),
            Some(Canned::TransportFailure) => Err(ClientError::Transport(
                "simulated connection failure".to_string(),
            )),
            None => Ok(json!([])),
        }
    }

    async fn sync_workbook(
        &self,
        kind: WorkbookKind,
        file_name: &str,
        _content: Vec<u8>,
    ) -> ClientResult<SyncAck> {
        self.record(kind.as_action_str(), &[("filename", file_name)]);
        Ok(SyncAck {
            success: true,
            message: "Authority sync enabled.".to_string(),
        })
    }
}

// ==========================================
// Payload fixtures
// ==========================================

/// Three index rows: complete, sparse, and status-less.
pub fn index_payload() -> Value {
    json!([
        [
            "so-100",
            "SO-2207",
            "AWAY",
            "PO-881,PO-882",
            "Finished Produced",
            "2026-02-01T06:30:00+00:00"
        ],
        ["so-101", "SO-2208", null, "", "In Production", null],
        ["so-102", "SO-2209", "TUMI", "PO-900"]
    ])
}

/// Two export rows: one shipped (linked to so-100), one still open.
pub fn exports_payload() -> Value {
    json!([
        [
            "exp-1",
            "INV-9921",
            "so-100",
            "MSKU7712389",
            "ID-SEAL-44",
            "2026-02-11",
            "Shipped"
        ],
        ["exp-2", "INV-9922", "so-102", "TGHU5520011", "", "", "Loading"]
    ])
}

/// Two allocation lines in ledger order.
pub fn invoice_payload() -> Value {
    json!([
        {
            "PO": "PO-881",
            "TYPE": "CARRY-ON 21\"",
            "COLOR": "NAVY",
            "SIZE": "21",
            "QTY": 100,
            "REWORK": 4,
            "QTY_STATUS": "READY",
            "INV_STATUS": "EXPORTED 2026-02-11"
        },
        {
            "PO": "PO-882",
            "TYPE": "CHECKED 25\"",
            "COLOR": "NAVY",
            "SIZE": "25",
            "QTY": 250,
            "REWORK": 0,
            "QTY_STATUS": "NOT READY",
            "INV_STATUS": "PARTIAL"
        }
    ])
}

/// Dashboard counter rows.
pub fn dashboard_payload() -> Value {
    json!([
        ["Produced", 8450, "#0ea5e9"],
        ["Remaining", 3120, "#e2e8f0"],
        ["Rework", 145, "#ef4444"]
    ])
}

/// Drive listing for a packing folder.
pub fn drive_files_payload() -> Value {
    json!([
        {
            "id": "f-1",
            "name": "AWAY SO-2207.xlsx",
            "downloadUrl": "https://drive.example/f-1",
            "updated": "2026-02-01"
        },
        {
            "id": "f-2",
            "name": "AWAY SO-2208.xlsx",
            "downloadUrl": "https://drive.example/f-2",
            "updated": "2026-02-03"
        }
    ])
}
