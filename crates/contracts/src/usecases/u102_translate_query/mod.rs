pub mod request;
pub mod response;

pub use request::TranslateRequest;
pub use response::{TranslateResponse, INVALID_QUERY_FORMAT};

use crate::usecases::common::UseCaseMetadata;

pub struct TranslateQuery;

impl UseCaseMetadata for TranslateQuery {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "translate_query"
    }

    fn display_name() -> &'static str {
        "Ask in English"
    }

    fn endpoint() -> &'static str {
        "/translate"
    }

    fn description() -> &'static str {
        "Translate a natural-language question to SQL and run it against the active table"
    }
}
