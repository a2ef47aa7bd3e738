use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::extractor::{query::ApiQuery, validated::Validated};

/// Key used when no name is given.
const ABSENT_NAME: &str = "null";

#[derive(Debug, Deserialize, JsonSchema, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShowPersonQuery {
    /// Person's name
    ///
    /// The name of the person you are looking for
    #[validate(length(min = 1, max = 50))]
    #[param(min_length = 1, max_length = 50, example = "Jeersson")]
    pub name: Option<String>,
    /// Person's age
    ///
    /// The age of the person you are looking for
    #[param(example = "25")]
    pub age: String,
}

/// Maps the given name to the given age.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ShowPersonResponse(BTreeMap<String, String>);

impl IntoResponse for ShowPersonResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "person",
    params(ShowPersonQuery),
    responses(
        (status = 200, description = "A single entry mapping the name to the age"),
        (status = 422, description = "The query parameters are invalid"),
    )
)]
pub async fn show_person(
    Validated(ApiQuery(query)): Validated<ApiQuery<ShowPersonQuery>>,
) -> ShowPersonResponse {
    let name = query.name.unwrap_or_else(|| ABSENT_NAME.to_string());

    ShowPersonResponse(BTreeMap::from([(name, query.age)]))
}
