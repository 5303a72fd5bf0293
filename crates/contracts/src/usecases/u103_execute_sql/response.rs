use serde::{Deserialize, Serialize};

use crate::usecases::common::{Cell, QueryResult};

/// Successful `/execute_sql` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteSqlResponse {
    #[serde(default)]
    pub columns: Option<Vec<String>>,

    #[serde(default)]
    pub rows: Option<Vec<Vec<Cell>>>,
}

impl ExecuteSqlResponse {
    pub fn into_result(self) -> Option<QueryResult> {
        QueryResult::from_parts(self.columns, self.rows)
    }
}
