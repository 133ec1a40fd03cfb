use utoipa::openapi::Components;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "In-memory user directory with bearer-token access."
    ),
    paths(
        crate::routes::list_users,
        crate::routes::get_user,
        crate::routes::create_user,
        crate::routes::update_user,
        crate::routes::delete_user,
    ),
    components(schemas(
        crate::dto::UserRequest,
        crate::dto::UserResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "users", description = "User management"),
    ),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by every user route.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let scheme = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .description(Some("One of the tokens listed in ROSTER_API_TOKENS."))
            .build();

        openapi
            .components
            .get_or_insert_with(Components::default)
            .add_security_scheme("bearer", SecurityScheme::Http(scheme));
    }
}
