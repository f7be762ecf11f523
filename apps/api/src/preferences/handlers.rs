//! Axum route handlers for the Preferences API.
//!
//! Every route requires a verified caller (the `AuthUser` extractor) and
//! responds with the full updated document, so the client always re-renders
//! from one authoritative payload.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extract::AuthUser;
use crate::errors::{AppError, AppJson};
use crate::preferences::models::{
    Audience, EmailTemplate, NewSavedEmail, SavedEmailPatch, Signature, Tone, UserPreferences,
};
use crate::preferences::ops;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateTonesRequest {
    pub tones: Vec<Tone>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAudiencesRequest {
    pub audiences: Vec<Audience>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTemplatesRequest {
    pub templates: Vec<EmailTemplate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSignaturesRequest {
    pub signatures: Vec<Signature>,
}

/// The uniform success payload. `data` is `null` only for the two no-op
/// cases (toggling or defaulting an unknown id).
#[derive(Debug, Serialize)]
pub struct PreferencesEnvelope {
    pub success: bool,
    pub data: Option<UserPreferences>,
}

fn envelope(prefs: UserPreferences) -> Json<PreferencesEnvelope> {
    Json(PreferencesEnvelope {
        success: true,
        data: Some(prefs),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state.preferences.get_user_preferences(&user.user_id).await?;
    Ok(envelope(prefs))
}

/// POST /api/preferences/reset
pub async fn reset_preferences(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state.preferences.reset_to_defaults(&user.user_id).await?;
    Ok(envelope(prefs))
}

// ────────────────────────────────────────────────────────────────────────────
// Tones
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/preferences/tones
pub async fn update_tones(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(body): AppJson<UpdateTonesRequest>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    if body.tones.len() > ops::TONES.max {
        return Err(AppError::Validation("Invalid tones data".to_string()));
    }
    let prefs = state
        .preferences
        .update_tones(&user.user_id, body.tones)
        .await?;
    Ok(envelope(prefs))
}

/// POST /api/preferences/tones
pub async fn add_tone(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(tone): AppJson<Tone>,
) -> Result<(StatusCode, Json<PreferencesEnvelope>), AppError> {
    let prefs = state.preferences.add_tone(&user.user_id, tone).await?;
    Ok((StatusCode::CREATED, envelope(prefs)))
}

/// DELETE /api/preferences/tones/:id
pub async fn delete_tone(
    State(state): State<AppState>,
    user: AuthUser,
    Path(tone_id): Path<String>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state.preferences.delete_tone(&user.user_id, &tone_id).await?;
    Ok(envelope(prefs))
}

// ────────────────────────────────────────────────────────────────────────────
// Audiences
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/preferences/audiences
pub async fn update_audiences(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(body): AppJson<UpdateAudiencesRequest>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    if body.audiences.len() > ops::AUDIENCES.max {
        return Err(AppError::Validation("Invalid audiences data".to_string()));
    }
    let prefs = state
        .preferences
        .update_audiences(&user.user_id, body.audiences)
        .await?;
    Ok(envelope(prefs))
}

/// POST /api/preferences/audiences
pub async fn add_audience(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(audience): AppJson<Audience>,
) -> Result<(StatusCode, Json<PreferencesEnvelope>), AppError> {
    let prefs = state
        .preferences
        .add_audience(&user.user_id, audience)
        .await?;
    Ok((StatusCode::CREATED, envelope(prefs)))
}

/// DELETE /api/preferences/audiences/:id
pub async fn delete_audience(
    State(state): State<AppState>,
    user: AuthUser,
    Path(audience_id): Path<String>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .delete_audience(&user.user_id, &audience_id)
        .await?;
    Ok(envelope(prefs))
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/preferences/templates
pub async fn update_templates(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(body): AppJson<UpdateTemplatesRequest>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    if body.templates.len() > ops::TEMPLATES.max {
        return Err(AppError::Validation("Invalid templates data".to_string()));
    }
    let prefs = state
        .preferences
        .update_templates(&user.user_id, body.templates)
        .await?;
    Ok(envelope(prefs))
}

/// POST /api/preferences/templates
pub async fn add_template(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(template): AppJson<EmailTemplate>,
) -> Result<(StatusCode, Json<PreferencesEnvelope>), AppError> {
    let prefs = state
        .preferences
        .add_template(&user.user_id, template)
        .await?;
    Ok((StatusCode::CREATED, envelope(prefs)))
}

/// DELETE /api/preferences/templates/:id
pub async fn delete_template(
    State(state): State<AppState>,
    user: AuthUser,
    Path(template_id): Path<String>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .delete_template(&user.user_id, &template_id)
        .await?;
    Ok(envelope(prefs))
}

// ────────────────────────────────────────────────────────────────────────────
// Saved emails
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/preferences/emails
pub async fn save_email(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(email): AppJson<NewSavedEmail>,
) -> Result<(StatusCode, Json<PreferencesEnvelope>), AppError> {
    let prefs = state.preferences.save_email(&user.user_id, email).await?;
    Ok((StatusCode::CREATED, envelope(prefs)))
}

/// PUT /api/preferences/emails/:id
pub async fn update_email(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email_id): Path<String>,
    AppJson(patch): AppJson<SavedEmailPatch>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .update_email(&user.user_id, &email_id, patch)
        .await?;
    Ok(envelope(prefs))
}

/// DELETE /api/preferences/emails/:id
pub async fn delete_email(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email_id): Path<String>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .delete_email(&user.user_id, &email_id)
        .await?;
    Ok(envelope(prefs))
}

/// PATCH /api/preferences/emails/:id/favorite
pub async fn toggle_email_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email_id): Path<String>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .toggle_email_favorite(&user.user_id, &email_id)
        .await?;
    Ok(Json(PreferencesEnvelope {
        success: true,
        data: prefs,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Signatures
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/preferences/signatures
pub async fn update_signatures(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(body): AppJson<UpdateSignaturesRequest>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .update_signatures(&user.user_id, body.signatures)
        .await?;
    Ok(envelope(prefs))
}

/// POST /api/preferences/signatures
pub async fn add_signature(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(signature): AppJson<Signature>,
) -> Result<(StatusCode, Json<PreferencesEnvelope>), AppError> {
    let prefs = state
        .preferences
        .add_signature(&user.user_id, signature)
        .await?;
    Ok((StatusCode::CREATED, envelope(prefs)))
}

/// DELETE /api/preferences/signatures/:id
pub async fn delete_signature(
    State(state): State<AppState>,
    user: AuthUser,
    Path(signature_id): Path<String>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .delete_signature(&user.user_id, &signature_id)
        .await?;
    Ok(envelope(prefs))
}

/// PATCH /api/preferences/signatures/:id/default
pub async fn set_default_signature(
    State(state): State<AppState>,
    user: AuthUser,
    Path(signature_id): Path<String>,
) -> Result<Json<PreferencesEnvelope>, AppError> {
    let prefs = state
        .preferences
        .set_default_signature(&user.user_id, &signature_id)
        .await?;
    Ok(Json(PreferencesEnvelope {
        success: true,
        data: prefs,
    }))
}
