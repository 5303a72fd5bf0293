use contracts::usecases::u101_upload_dataset::{UploadDataset, UploadResponse, UPLOAD_FILE_FIELD};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_client::{read_reply, ApiResult};
use crate::shared::api_utils::usecase_url;
use crate::shared::error::ClientError;

/// Upload a file as multipart form data, keeping its original name
pub async fn upload_dataset(base_url: &str, file: &web_sys::File) -> ApiResult<UploadResponse> {
    let form_data = FormData::new().map_err(ClientError::browser)?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FILE_FIELD, file, &file.name())
        .map_err(ClientError::browser)?;

    let response = Request::post(&usecase_url::<UploadDataset>(base_url))
        .body(form_data)?
        .send()
        .await?;

    read_reply(response).await
}
