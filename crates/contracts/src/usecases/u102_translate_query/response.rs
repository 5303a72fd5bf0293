use serde::{Deserialize, Serialize};

use crate::usecases::common::{Cell, QueryResult};

/// Value of `sql` when the server could not parse the question
pub const INVALID_QUERY_FORMAT: &str = "Invalid query format";

/// Successful `/translate` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub sql: String,

    /// "Did you mean" hint, only sent alongside [`INVALID_QUERY_FORMAT`]
    #[serde(default)]
    pub corrected: Option<String>,

    #[serde(default)]
    pub columns: Option<Vec<String>>,

    #[serde(default)]
    pub rows: Option<Vec<Vec<Cell>>>,
}

impl TranslateResponse {
    /// Soft failure: the request succeeded but the question was not understood
    pub fn is_invalid_format(&self) -> bool {
        self.sql == INVALID_QUERY_FORMAT
    }

    pub fn into_result(self) -> Option<QueryResult> {
        QueryResult::from_parts(self.columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_format_with_correction() {
        let json = r#"{"sql":"Invalid query format","corrected":"SELECT * FROM t"}"#;
        let response: TranslateResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_invalid_format());
        assert_eq!(response.corrected.as_deref(), Some("SELECT * FROM t"));
        assert!(response.into_result().is_none());
    }

    #[test]
    fn test_valid_translation_carries_result() {
        let json = r#"{
            "sql": "SELECT category, COUNT(*) FROM t GROUP BY category",
            "columns": ["category", "count"],
            "rows": [["x", 3], ["y", 5]]
        }"#;
        let response: TranslateResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_invalid_format());

        let result = response.into_result().unwrap();
        assert_eq!(result.rows[1], vec![json!("y"), json!(5)]);
    }
}
