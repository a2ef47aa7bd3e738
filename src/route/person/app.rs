use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route(
            "/new",
            post(super::create_person::create_person)
                .put(super::update_person::update_person_with_static_id),
        )
        .route(
            "/detail",
            get(super::show_person::show_person)
                .put(super::update_person::update_person_with_static_id),
        )
        .route(
            "/details/:person_id",
            get(super::show_person_details::show_person_details),
        )
        .route("/:person_id", put(super::update_person::update_person))
}
