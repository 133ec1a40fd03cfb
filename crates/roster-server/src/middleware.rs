//! Cross-cutting request middleware.
//!
//! Every function here has the `(request, next) -> response` shape of
//! [`axum::middleware::from_fn`]. [`apply`] composes them around a router in
//! a fixed order, outermost first: error recovery, authentication, logging.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use roster_core::AppError;

use crate::error::{ApiError, internal_error};
use crate::state::AppState;

/// Wrap `router` in the full middleware chain.
pub fn apply(router: Router<Arc<AppState>>, state: Arc<AppState>) -> Router<Arc<AppState>> {
    // Layers added later run first.
    router
        .layer(middleware::from_fn(log_requests))
        .layer(middleware::from_fn_with_state(state, require_token))
        .layer(middleware::from_fn(recover_errors))
}

/// Turn a panic anywhere downstream into a generic 500.
pub async fn recover_errors(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!(
                %method,
                %path,
                cause = %panic_message(panic.as_ref()),
                "Request failed with an unhandled error"
            );
            internal_error()
        }
    }
}

/// Reject requests whose `Authorization` token is not on the allow-list.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if !state.authenticator.authenticate(auth_header) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request with missing or invalid token"
        );
        return ApiError(AppError::Unauthorized).into_response();
    }

    next.run(request).await
}

/// Log the request line, then the status once the handler has answered.
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    tracing::info!(%method, %path, "Request started");

    let started = Instant::now();
    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis(),
        "Request finished"
    );
    response
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
