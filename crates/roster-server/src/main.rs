use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use roster_core::{TokenAuthenticator, UserStore};
use roster_server::config::ServerConfig;
use roster_server::routes;
use roster_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster=info".parse()?))
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let addr = format!("0.0.0.0:{}", config.port);

    let users = if config.seed_demo {
        UserStore::demo()
    } else {
        UserStore::new()
    };
    let user_count = users.len().await;
    tracing::info!(users = user_count, "User store ready");

    let authenticator = TokenAuthenticator::new(config.api_tokens);
    let state = Arc::new(AppState::new(users, authenticator));

    let mut app = routes::router(state);
    if config.api_docs {
        tracing::info!("Serving API docs at /swagger-ui");
        app = routes::with_api_docs(app);
    }
    let app = app.layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
