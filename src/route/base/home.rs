use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    #[serde(rename = "Hello")]
    #[schema(example = "Hello World")]
    hello: String,
}

impl IntoResponse for HomeResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Greets the caller.
#[utoipa::path(
    get,
    path = "/",
    tag = "base",
    responses((status = 200, description = "A fixed greeting", body = HomeResponse))
)]
pub async fn home() -> HomeResponse {
    HomeResponse {
        hello: "Hello World".to_string(),
    }
}
