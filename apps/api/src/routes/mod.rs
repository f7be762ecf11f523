pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers as email;
use crate::preferences::handlers as preferences;
use crate::state::AppState;

/// Unmatched paths answer in the same envelope as every other error.
async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    // Preferences API — every route resolves the caller from the bearer token
    let preferences_routes = Router::new()
        .route("/", get(preferences::get_preferences))
        .route(
            "/tones",
            put(preferences::update_tones).post(preferences::add_tone),
        )
        .route("/tones/:id", delete(preferences::delete_tone))
        .route(
            "/audiences",
            put(preferences::update_audiences).post(preferences::add_audience),
        )
        .route("/audiences/:id", delete(preferences::delete_audience))
        .route(
            "/templates",
            put(preferences::update_templates).post(preferences::add_template),
        )
        .route("/templates/:id", delete(preferences::delete_template))
        .route("/emails", post(preferences::save_email))
        .route(
            "/emails/:id",
            put(preferences::update_email).delete(preferences::delete_email),
        )
        .route(
            "/emails/:id/favorite",
            patch(preferences::toggle_email_favorite),
        )
        .route(
            "/signatures",
            put(preferences::update_signatures).post(preferences::add_signature),
        )
        .route("/signatures/:id", delete(preferences::delete_signature))
        .route(
            "/signatures/:id/default",
            patch(preferences::set_default_signature),
        )
        .route("/reset", post(preferences::reset_preferences));

    // Email API — public catalog plus the policy-gated generate route
    let email_routes = Router::new()
        .route("/generate", post(email::generate_email))
        .route("/tones", get(email::get_tones))
        .route("/audiences", get(email::get_audiences))
        .route("/templates", get(email::get_templates));

    Router::new()
        .nest("/api/preferences", preferences_routes)
        .nest("/api/email", email_routes)
        .route("/api/health", get(health::health_handler))
        .fallback(not_found)
        .with_state(state)
}
