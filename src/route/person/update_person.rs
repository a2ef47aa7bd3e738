use axum::{extract::State, http::Uri};

use crate::{
    error::{ApiError, ErrorVerbosityProvider, PathError},
    extractor::{expected_schema, json::ApiJson, path::ApiPath, validated::Validated},
    state::ApiState,
};

use super::{Person, PersonIdPath};

/// Echoes a validated person for a positive person id.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "person",
    params(PersonIdPath),
    request_body(content = Person, description = "The details of the person you are looking for"),
    responses(
        (status = 200, description = "The validated person", body = Person),
        (status = 422, description = "The person id or the body is invalid"),
    )
)]
pub async fn update_person(
    Validated(ApiPath(PersonIdPath { person_id })): Validated<ApiPath<PersonIdPath>>,
    Validated(ApiJson(person)): Validated<ApiJson<Person>>,
) -> Person {
    tracing::debug!(person_id, "Updating person");

    person
}

/// PUT on a static person route such as `/person/new`.
///
/// Static routes win over `/person/{person_id}` for every method, so the last segment
/// is rejected here the way [`ApiPath`] rejects any other non-integer person id.
pub async fn update_person_with_static_id(State(state): State<ApiState>, uri: Uri) -> ApiError {
    let verbosity = state.error_verbosity();
    let segment = uri.path().rsplit('/').next().unwrap_or_default();

    tracing::warn!(segment, "Rejection. Person id is not an integer");

    let path_expected_schema = match expected_schema::<PersonIdPath>(verbosity) {
        Ok(schema) => schema,
        Err(err) => return err.into(),
    };

    PathError::new(
        verbosity,
        format!("Invalid URL: Cannot parse `{segment}` to a `i64`"),
        path_expected_schema,
    )
    .into()
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
            "age": 115,
            "hair_color": "red",
            "is_married": true,
        })
    }

    #[tokio::test]
    async fn valid_person_is_echoed() {
        let (status, body) = send(json_request("PUT", "/person/7", person())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, person());
    }

    #[tokio::test]
    async fn body_is_not_embedded() {
        let (status, body) =
            send(json_request("PUT", "/person/7", json!({ "person": person() }))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Body");
    }

    #[tokio::test]
    async fn non_positive_id_is_rejected_before_the_body() {
        let (status, body) = send(json_request("PUT", "/person/0", person())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Validation");
        assert!(body["error"]["validation_errors"]["person_id"].is_array());
    }

    #[tokio::test]
    async fn invalid_body_is_rejected() {
        let mut person = person();
        person["age"] = json!(116);
        person["first_name"] = json!("");

        let (status, body) = send(json_request("PUT", "/person/7", person)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Validation");
        assert!(body["error"]["validation_errors"]["age"].is_array());
        assert!(body["error"]["validation_errors"]["first_name"].is_array());
    }

    #[tokio::test]
    async fn static_route_segment_is_rejected_as_person_id() {
        for uri in ["/person/new", "/person/detail"] {
            let (status, body) = send(json_request("PUT", uri, person())).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
            assert_eq!(body["error_type"], "Path", "{uri}");
            assert!(body["error"]["path_error_reason"]
                .as_str()
                .expect("Reason is present at full verbosity")
                .contains("Cannot parse"));
            assert!(body["error"]["path_expected_schema"].is_string());
        }
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let (status, body) = send(json_request("PUT", "/person/abc", person())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Path");
    }

    #[tokio::test]
    async fn unknown_hair_color_is_rejected() {
        let mut person = person();
        person["hair_color"] = json!("blue");

        let (status, body) = send(json_request("PUT", "/person/7", person)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Body");
    }

    #[tokio::test]
    async fn missing_first_name_is_rejected() {
        let mut person = person();
        person
            .as_object_mut()
            .expect("Person is an object")
            .remove("first_name");

        let (status, body) = send(json_request("PUT", "/person/7", person)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Body");
        assert!(body["error"]["body_error_reason"]
            .as_str()
            .expect("Reason is present at full verbosity")
            .contains("first_name"));
    }

    #[tokio::test]
    async fn missing_body_is_rejected() {
        let (status, body) = send(json_request("PUT", "/person/7", serde_json::Value::Null)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error_type"], "Body");
    }
}
