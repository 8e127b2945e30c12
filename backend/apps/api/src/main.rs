//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are rendered by
//! each crate through `kernel::error::AppError`.

use auth::middleware::{GateState, session_gate};
use auth::{GateConfig, JwtSessionVerifier, SessionGate, session_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use catalog::{CatalogConfig, catalog_router};
use characters::{PgCharacterRepository, characters_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,catalog=info,auth=info,characters=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Session gate configuration
    let gate_config = Arc::new(gate_config()?);
    let verifier = Arc::new(JwtSessionVerifier::new(&gate_config));
    let gate = Arc::new(SessionGate::new(verifier, gate_config.clone()));

    // Catalog configuration
    let catalog_config = CatalogConfig::from_env();
    tracing::info!(
        base_url = %catalog_config.base_url,
        cache_ttl_secs = catalog_config.cache_ttl.map(|ttl| ttl.as_secs()),
        "Catalog configured"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let api = catalog_router(catalog_config).merge(session_router(gate_config.clone()));

    let app = Router::new()
        .merge(characters_router(PgCharacterRepository::new(pool.clone())))
        .nest("/api", api)
        .layer(axum::middleware::from_fn_with_state(
            GateState::new(gate),
            session_gate::<JwtSessionVerifier>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:31113".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Gate config from the environment
///
/// `SESSION_SECRET` (standard base64) is required in release builds; debug
/// builds fall back to a random secret with insecure cookies.
fn gate_config() -> anyhow::Result<GateConfig> {
    let secret = env::var("SESSION_SECRET").ok();

    let base = if cfg!(debug_assertions) {
        GateConfig::development()
    } else {
        GateConfig::default()
    };

    match secret {
        Some(secret_b64) => {
            let session_secret = platform::crypto::from_base64(secret_b64.trim())?;
            if session_secret.len() < 32 {
                anyhow::bail!("SESSION_SECRET must decode to at least 32 bytes");
            }
            Ok(GateConfig {
                session_secret,
                ..base
            })
        }
        None if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random development secret");
            Ok(base)
        }
        None => anyhow::bail!("SESSION_SECRET must be set in production"),
    }
}
