//! Transport seam between the controllers and the server
//!
//! Controllers only see [`QueryApi`]; the browser build plugs in
//! [`HttpQueryApi`], tests plug in an in-memory fake.

use async_trait::async_trait;
use contracts::usecases::common::ApiErrorBody;
use contracts::usecases::u101_upload_dataset::UploadResponse;
use contracts::usecases::u102_translate_query::{TranslateRequest, TranslateResponse};
use contracts::usecases::u103_execute_sql::{ExecuteSqlRequest, ExecuteSqlResponse};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use super::error::ClientError;
use crate::usecases::{u101_upload_dataset, u102_translate_query, u103_execute_sql};

/// Answer from an endpoint that was reached
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    /// 2xx with a decoded body
    Accepted(T),
    /// Any other status; `error` is the server's message if it sent one
    Rejected { status: u16, error: Option<String> },
}

pub type ApiResult<T> = Result<ApiReply<T>, ClientError>;

#[async_trait(?Send)]
pub trait QueryApi {
    /// Blob handed to [`QueryApi::upload`]
    type File;

    async fn upload(&self, file: &Self::File) -> ApiResult<UploadResponse>;

    async fn translate(&self, request: &TranslateRequest) -> ApiResult<TranslateResponse>;

    async fn execute_sql(&self, request: &ExecuteSqlRequest) -> ApiResult<ExecuteSqlResponse>;
}

/// Browser client backed by `fetch`
#[derive(Debug, Clone)]
pub struct HttpQueryApi {
    base_url: String,
}

impl HttpQueryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl QueryApi for HttpQueryApi {
    type File = web_sys::File;

    async fn upload(&self, file: &web_sys::File) -> ApiResult<UploadResponse> {
        u101_upload_dataset::api::upload_dataset(&self.base_url, file).await
    }

    async fn translate(&self, request: &TranslateRequest) -> ApiResult<TranslateResponse> {
        u102_translate_query::api::translate_query(&self.base_url, request).await
    }

    async fn execute_sql(&self, request: &ExecuteSqlRequest) -> ApiResult<ExecuteSqlResponse> {
        u103_execute_sql::api::execute_sql(&self.base_url, request).await
    }
}

/// Turns an HTTP response into an [`ApiReply`]
pub(crate) async fn read_reply<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await?;
    classify_reply(ok, status, &body)
}

/// A non-2xx status is a rejection whatever the body holds; a body that is not
/// JSON only loses the server message.
pub(crate) fn classify_reply<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> ApiResult<T> {
    if !ok {
        let error = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|body| body.error);
        return Ok(ApiReply::Rejected { status, error });
    }

    let body = serde_json::from_str::<T>(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    Ok(ApiReply::Accepted(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_wins_over_success_shaped_body() {
        let body = r#"{"columns":["a"],"rows":[[1]]}"#;
        let reply = classify_reply::<ExecuteSqlResponse>(false, 400, body).unwrap();
        assert_eq!(reply, ApiReply::Rejected { status: 400, error: None });
    }

    #[test]
    fn test_error_status_keeps_server_message() {
        let body = r#"{"error":"no such table: t"}"#;
        let reply = classify_reply::<ExecuteSqlResponse>(false, 500, body).unwrap();
        assert_eq!(
            reply,
            ApiReply::Rejected {
                status: 500,
                error: Some("no such table: t".into())
            }
        );
    }

    #[test]
    fn test_error_status_with_html_body() {
        let body = "<html><body>502 Bad Gateway</body></html>";
        let reply = classify_reply::<TranslateResponse>(false, 502, body).unwrap();
        assert_eq!(reply, ApiReply::Rejected { status: 502, error: None });
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = classify_reply::<ExecuteSqlResponse>(true, 200, "{not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_success_body_is_accepted() {
        let body = r#"{"columns":["a"],"rows":[[1]]}"#;
        let reply = classify_reply::<ExecuteSqlResponse>(true, 200, body).unwrap();
        assert!(matches!(reply, ApiReply::Accepted(_)));
    }
}
