//! Axum route handlers for the Generation API.
//!
//! The catalog routes are public. Generation itself is policy-gated: with
//! `GENERATE_REQUIRES_AUTH=true` (the default) an anonymous caller gets 401,
//! with it off the route serves anonymous traffic too.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::auth::extract::MaybeAuthUser;
use crate::errors::{AppError, AppJson};
use crate::generation::catalog;
use crate::generation::service::{EmailRequest, GenerationMetadata};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// All fields optional at the parse step so missing ones produce the
/// field-level message below instead of a serde error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateEmailBody {
    pub prompt: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateEmailResponse {
    pub success: bool,
    pub email: String,
    pub metadata: GenerationMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/email/generate
pub async fn generate_email(
    State(state): State<AppState>,
    user: MaybeAuthUser,
    AppJson(body): AppJson<GenerateEmailBody>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    if state.config.generate_requires_auth && user.0.is_none() {
        return Err(AppError::Unauthorized);
    }

    let (Some(prompt), Some(tone), Some(audience)) = (body.prompt, body.tone, body.audience)
    else {
        return Err(AppError::Validation(
            "Missing required fields: prompt, tone, and audience are required".to_string(),
        ));
    };

    if prompt.trim().is_empty() || tone.trim().is_empty() || audience.trim().is_empty() {
        return Err(AppError::Validation(
            "Fields cannot be empty or contain only whitespace".to_string(),
        ));
    }

    if let Some(caller) = &user.0 {
        info!("User {} requested email generation", caller.user_id);
    }

    let generated = state
        .generator
        .generate(&EmailRequest {
            prompt,
            tone,
            audience,
        })
        .await?;

    Ok(Json(GenerateEmailResponse {
        success: true,
        email: generated.email,
        metadata: generated.metadata,
    }))
}

/// GET /api/email/tones
pub async fn get_tones() -> Json<Value> {
    Json(json!({
        "success": true,
        "tones": catalog::TONES,
    }))
}

/// GET /api/email/audiences
pub async fn get_audiences() -> Json<Value> {
    Json(json!({
        "success": true,
        "audiences": catalog::AUDIENCES,
    }))
}

/// GET /api/email/templates
pub async fn get_templates() -> Json<Value> {
    Json(json!({
        "success": true,
        "templates": catalog::TEMPLATES,
    }))
}
