use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use roster_core::{AppError, UserInput, validate};

use crate::dto::{UserRequest, UserResponse};
use crate::error::ApiError;
use crate::middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the router with all user routes behind the middleware chain.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .fallback(not_found);

    middleware::apply(api, state.clone()).with_state(state)
}

/// Expose Swagger UI and the OpenAPI document alongside `router`.
///
/// The docs routes sit outside the authentication chain.
pub fn with_api_docs(router: Router) -> Router {
    router.merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users in insertion order", body = [UserResponse]),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserResponse>> {
    let users = state.users.list().await;
    Json(users.into_iter().map(UserResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "Not found", body = String),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id?;

    let user = state
        .users
        .find_by_id(id)
        .await
        .ok_or(AppError::NotFound(id))?;

    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Validation failed", body = String),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let input = UserInput::from(body);
    validate(&input)?;

    let user = state.users.insert(input).await;
    tracing::info!(id = user.id, "User created");

    let location = format!("/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation failed", body = String),
        (status = 404, description = "Not found", body = String),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id?;

    // Existence is checked before the payload, so an unknown id wins over a bad body.
    if state.users.find_by_id(id).await.is_none() {
        return Err(AppError::NotFound(id).into());
    }

    let Json(body) = body?;
    let input = UserInput::from(body);
    validate(&input)?;

    let user = state
        .users
        .update(id, input)
        .await
        .ok_or(AppError::NotFound(id))?;

    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Not found", body = String),
        (status = 401, description = "Unauthorized", body = crate::dto::ErrorResponse),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;

    if !state.users.remove(id).await {
        return Err(AppError::NotFound(id).into());
    }
    tracing::info!(id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json("Not found."))
}
