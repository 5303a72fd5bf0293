use contracts::usecases::u102_translate_query::{TranslateQuery, TranslateRequest, TranslateResponse};
use gloo_net::http::Request;

use crate::shared::api_client::{read_reply, ApiResult};
use crate::shared::api_utils::usecase_url;

pub async fn translate_query(base_url: &str, request: &TranslateRequest) -> ApiResult<TranslateResponse> {
    let response = Request::post(&usecase_url::<TranslateQuery>(base_url))
        .json(request)?
        .send()
        .await?;

    read_reply(response).await
}
