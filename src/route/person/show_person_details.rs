use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::extractor::{path::ApiPath, validated::Validated};

use super::PersonIdPath;

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ShowPersonDetailsResponse(BTreeMap<i64, &'static str>);

impl IntoResponse for ShowPersonDetailsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/person/details/{person_id}",
    tag = "person",
    params(PersonIdPath),
    responses(
        (status = 200, description = "The person exists"),
        (status = 422, description = "The person id is not a positive integer"),
    )
)]
pub async fn show_person_details(
    Validated(ApiPath(PersonIdPath { person_id })): Validated<ApiPath<PersonIdPath>>,
) -> ShowPersonDetailsResponse {
    ShowPersonDetailsResponse(BTreeMap::from([(person_id, "It exists!")]))
}
