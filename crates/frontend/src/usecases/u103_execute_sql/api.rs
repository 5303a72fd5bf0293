use contracts::usecases::u103_execute_sql::{ExecuteSql, ExecuteSqlRequest, ExecuteSqlResponse};
use gloo_net::http::Request;

use crate::shared::api_client::{read_reply, ApiResult};
use crate::shared::api_utils::usecase_url;

pub async fn execute_sql(base_url: &str, request: &ExecuteSqlRequest) -> ApiResult<ExecuteSqlResponse> {
    let response = Request::post(&usecase_url::<ExecuteSql>(base_url))
        .json(request)?
        .send()
        .await?;

    read_reply(response).await
}
