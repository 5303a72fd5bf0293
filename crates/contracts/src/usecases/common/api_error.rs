use serde::{Deserialize, Serialize};

/// Body returned by every endpoint on a non-success status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
