use schemars::JsonSchema;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::extractor::{json::ApiJson, validated::Validated};

use super::Person;

/// The person is embedded under the `person` key.
#[derive(Debug, Deserialize, JsonSchema, ToSchema, Validate)]
pub struct NewPersonBody {
    #[validate(nested)]
    pub person: Person,
}

/// Echoes a validated person.
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "person",
    request_body = NewPersonBody,
    responses(
        (status = 200, description = "The validated person", body = Person),
        (status = 422, description = "The body violates the person schema"),
    )
)]
pub async fn create_person(
    Validated(ApiJson(NewPersonBody { person })): Validated<ApiJson<NewPersonBody>>,
) -> Person {
    person
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test::{json_request, send};

    fn person() -> serde_json::Value {
        json!({
            "first_name": "Jeersson",
            "last_name": "Maradiaga Carballo",
            "age": 25,
            "hair_color": "blond",
            "is_married": false,
        })
    }

    #[tokio::test]
    async fn valid_person_is_echoed() {
        let (status, body) =
            send(json_request("POST", "/person/new", json!({ "person": person() }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, person());
    }

    #[tokio::test]
    async fn optional_fields_are_echoed_as_null() {
        let (status, body) = send(json_request(
            "POST",
            "/person/new",
            json!({ "person": { "first_name": "A", "last_name": "B", "age": 1 } }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "first_name": "A",
                "last_name": "B",
                "age": 1,
                "hair_color": null,
                "is_married": null,
            })
        );
    }

    #[tokio::test]
    async fn out_of_range_age_is_rejected() {
        for age in [0, 116] {
            let mut person = person();
            person["age"] = json!(age);

            let (status, body) =
                send(json_request("POST", "/person/new", json!({ "person": person }))).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body["error_type"], "Validation");
            assert!(body["error"]["validation_errors"]["person"].is_object());
        }
    }

    #[tokio::test]
    async fn missing_first_name_is_rejected() {
        let mut person = person();
        person
            .as_object_mut()
            .expect("Person is an object")
            .remove("first_name");

        let (status, body) =
            send(json_request("POST", "/person/new", json!({ "person": person }))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Body");
    }

    #[tokio::test]
    async fn unknown_hair_color_is_rejected() {
        let mut person = person();
        person["hair_color"] = json!("green");

        let (status, body) =
            send(json_request("POST", "/person/new", json!({ "person": person }))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Body");
    }

    #[tokio::test]
    async fn person_must_be_embedded() {
        let (status, body) = send(json_request("POST", "/person/new", person())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Body");
        assert!(body["error"]["body_expected_schema"].is_string());
    }
}
