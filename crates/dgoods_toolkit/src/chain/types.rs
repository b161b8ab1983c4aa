use serde::{Deserialize, Serialize};

/// Body of a `get_table_rows` query against the node's chain API.
#[derive(Debug, Clone, Serialize)]
pub struct GetTableRowsRequest {
    pub json: bool,
    pub code: String,
    pub scope: String,
    pub table: String,
    pub lower_bound: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<u64>,
    pub limit: u32,
}

/// One page of table rows. `more` signals that rows exist past the last
/// returned one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableRowsPage {
    pub rows: Vec<serde_json::Value>,
    #[serde(default)]
    pub more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    pub actor: String,
    pub permission: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub account: String,
    pub name: String,
    pub authorization: Vec<Authorization>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub actions: Vec<Action>,
}

/// Submission options. `blocks_behind` selects the reference block for the
/// transaction header; `expire_seconds` bounds its lifetime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TransactOptions {
    pub expire_seconds: u32,
    pub blocks_behind: u32,
}

impl Default for TransactOptions {
    fn default() -> Self {
        Self {
            expire_seconds: 30,
            blocks_behind: 3,
        }
    }
}

/// Structured failure body returned by the node on a rejected request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainErrorResponse {
    pub error: ChainErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainErrorDetail {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub name: String,
    pub what: String,
}
