mod auth;
mod config;
mod db;
mod errors;
mod generation;
mod llm_client;
mod preferences;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::JwtValidator;
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::generation::service::EmailGenerator;
use crate::llm_client::LlmClient;
use crate::preferences::service::PreferencesService;
use crate::preferences::store::PreferencesStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AICA API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and apply the schema
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Initialize the JWT validator for the Auth0 tenant
    let jwt = Arc::new(
        JwtValidator::with_rs256(
            &config.auth0_public_key,
            &config.auth0_issuer(),
            &config.auth0_audience,
        )
        .map_err(|e| anyhow::anyhow!("Failed to build JWT validator: {e}"))?,
    );
    info!("JWT validator initialized (issuer: {})", config.auth0_issuer());

    // Initialize the LLM client; absence degrades generation instead of aborting
    let llm = match &config.openai_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(LlmClient::new(key.clone()))
        }
        None => {
            warn!("OPENAI_API_KEY not set - email generation will report unavailable");
            None
        }
    };

    // Build app state
    let state = AppState {
        jwt,
        preferences: PreferencesService::new(PreferencesStore::new(db)),
        generator: EmailGenerator::new(llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the configured browser origin, with credentials,
/// covering the headers and methods the Angular client actually sends.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("CORS_ORIGIN is not a valid origin: {}", config.cors_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
