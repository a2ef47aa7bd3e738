use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub mod app;
pub mod create_person;
pub mod show_person;
pub mod show_person_details;
pub mod update_person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    Black,
    Blond,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema, Validate)]
#[schema(example = json!({
    "first_name": "Jeersson",
    "last_name": "Maradiaga Carballo",
    "age": 25,
    "hair_color": "blond",
    "is_married": false
}))]
pub struct Person {
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50)]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    #[schema(min_length = 1, max_length = 50)]
    pub last_name: String,
    #[validate(range(min = 1, max = 115))]
    #[schema(minimum = 1, maximum = 115)]
    pub age: i64,
    #[serde(default)]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    pub is_married: Option<bool>,
}

impl IntoResponse for Person {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Not accepted by any route. Published in the OpenAPI document only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Path parameters of the routes addressing a single person.
#[derive(Debug, Deserialize, JsonSchema, Validate, utoipa::IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
    /// Person's ID
    ///
    /// The ID of the person you are looking for
    #[validate(range(min = 1))]
    #[param(minimum = 1, example = 123)]
    pub person_id: i64,
}
