//! Test doubles for driving a [`Session`](super::Session) without a browser

use std::cell::RefCell;

use async_trait::async_trait;
use contracts::usecases::u101_upload_dataset::UploadResponse;
use contracts::usecases::u102_translate_query::{TranslateRequest, TranslateResponse};
use contracts::usecases::u103_execute_sql::{ExecuteSqlRequest, ExecuteSqlResponse};

use crate::shared::api_client::{ApiReply, ApiResult, QueryApi};

/// Canned replies plus a log of every call made
pub struct FakeApi {
    upload: ApiResult<UploadResponse>,
    translate: ApiResult<TranslateResponse>,
    execute: ApiResult<ExecuteSqlResponse>,
    calls: RefCell<Vec<&'static str>>,
    pub translate_requests: RefCell<Vec<TranslateRequest>>,
    pub execute_requests: RefCell<Vec<ExecuteSqlRequest>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            upload: rejected(500, None),
            translate: rejected(500, None),
            execute: rejected(500, None),
            calls: RefCell::new(Vec::new()),
            translate_requests: RefCell::new(Vec::new()),
            execute_requests: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn with_upload(mut self, reply: ApiResult<UploadResponse>) -> Self {
        self.upload = reply;
        self
    }

    pub fn with_translate(mut self, reply: ApiResult<TranslateResponse>) -> Self {
        self.translate = reply;
        self
    }

    pub fn with_execute(mut self, reply: ApiResult<ExecuteSqlResponse>) -> Self {
        self.execute = reply;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl QueryApi for FakeApi {
    /// File name stands in for the blob
    type File = &'static str;

    async fn upload(&self, _file: &&'static str) -> ApiResult<UploadResponse> {
        self.calls.borrow_mut().push("upload");
        self.upload.clone()
    }

    async fn translate(&self, request: &TranslateRequest) -> ApiResult<TranslateResponse> {
        self.calls.borrow_mut().push("translate");
        self.translate_requests.borrow_mut().push(request.clone());
        self.translate.clone()
    }

    async fn execute_sql(&self, request: &ExecuteSqlRequest) -> ApiResult<ExecuteSqlResponse> {
        self.calls.borrow_mut().push("execute_sql");
        self.execute_requests.borrow_mut().push(request.clone());
        self.execute.clone()
    }
}

pub fn rejected<T>(status: u16, error: Option<&str>) -> ApiResult<T> {
    Ok(ApiReply::Rejected {
        status,
        error: error.map(str::to_string),
    })
}

pub fn dataset_reply(columns: &[&str], suggestions: &[&str]) -> ApiResult<UploadResponse> {
    Ok(ApiReply::Accepted(UploadResponse {
        message: None,
        table_name: "table_ab12xy".to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }))
}
