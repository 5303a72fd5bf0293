pub mod request;
pub mod response;

pub use request::ExecuteSqlRequest;
pub use response::ExecuteSqlResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ExecuteSql;

impl UseCaseMetadata for ExecuteSql {
    fn usecase_index() -> &'static str {
        "u103"
    }

    fn usecase_name() -> &'static str {
        "execute_sql"
    }

    fn display_name() -> &'static str {
        "SQL playground"
    }

    fn endpoint() -> &'static str {
        "/execute_sql"
    }

    fn description() -> &'static str {
        "Run raw SQL against the uploaded tables"
    }
}
