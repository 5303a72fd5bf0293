use serde::{Deserialize, Serialize};

/// `/translate` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Question as typed by the user (not trimmed)
    pub query: String,
    pub table_name: String,
}
