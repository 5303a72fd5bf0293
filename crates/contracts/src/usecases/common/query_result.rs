use serde::{Deserialize, Serialize};

/// A single result cell; the server sends whatever SQLite produced
pub type Cell = serde_json::Value;

/// Tabular result of a translated or raw SQL query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl QueryResult {
    /// Pairs optional `columns`/`rows` fields; a result exists only when both are present.
    pub fn from_parts(columns: Option<Vec<String>>, rows: Option<Vec<Vec<Cell>>>) -> Option<Self> {
        match (columns, rows) {
            (Some(columns), Some(rows)) => Some(Self { columns, rows }),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (category, value) results are the ones worth charting
    pub fn is_two_column(&self) -> bool {
        self.columns.len() == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_parts_requires_both_fields() {
        assert!(QueryResult::from_parts(Some(vec!["a".into()]), None).is_none());
        assert!(QueryResult::from_parts(None, Some(vec![])).is_none());

        let result = QueryResult::from_parts(
            Some(vec!["category".into(), "count".into()]),
            Some(vec![vec![json!("x"), json!(3)]]),
        )
        .unwrap();
        assert!(result.is_two_column());
        assert!(!result.is_empty());
    }
}
