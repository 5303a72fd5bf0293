use serde::{Deserialize, Serialize};

/// `/execute_sql` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteSqlRequest {
    pub raw_sql: String,
}
