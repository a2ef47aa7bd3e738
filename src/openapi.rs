use utoipa::OpenApi;

use crate::route::{
    base::home::{self, HomeResponse},
    person::{
        create_person::{self, NewPersonBody},
        show_person, show_person_details, update_person, HairColor, Location, Person,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "person-api", description = "Validates and echoes persons"),
    paths(
        home::home,
        create_person::create_person,
        show_person::show_person,
        show_person_details::show_person_details,
        update_person::update_person,
    ),
    components(schemas(HomeResponse, Person, HairColor, Location, NewPersonBody)),
    tags(
        (name = "base", description = "Greeting"),
        (name = "person", description = "Person validation"),
    )
)]
pub struct ApiDoc;
