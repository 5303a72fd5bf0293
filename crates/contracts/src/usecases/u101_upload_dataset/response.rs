use serde::{Deserialize, Serialize};

/// Successful `/upload` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,

    /// Name of the table created for this file
    pub table_name: String,

    pub columns: Vec<String>,

    /// Candidate natural-language queries
    #[serde(default)]
    pub suggestions: Vec<String>,
}
