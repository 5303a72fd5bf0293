//! Common types and traits for all UseCases

pub mod api_error;
pub mod query_result;
pub mod usecase_metadata;

// Re-exports
pub use api_error::ApiErrorBody;
pub use query_result::{Cell, QueryResult};
pub use usecase_metadata::UseCaseMetadata;
