//! API utilities for client-server communication
//!
//! Builds endpoint URLs from the configured base.

use contracts::usecases::common::UseCaseMetadata;

/// Build a full API URL from a base and a path
///
/// An empty base yields a same-origin relative URL.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("http://localhost:5000/", "/upload");
/// assert_eq!(url, "http://localhost:5000/upload");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// URL of the endpoint serving UseCase `U`
pub fn usecase_url<U: UseCaseMetadata>(base: &str) -> String {
    api_url(base, U::endpoint())
}
