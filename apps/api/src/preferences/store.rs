//! Postgres persistence for preference documents.
//!
//! Item-level mutations run inside a transaction holding a row lock
//! (`SELECT ... FOR UPDATE`), so two concurrent requests against the same
//! user serialize instead of overwriting each other's collections.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::errors::AppError;
use crate::preferences::defaults;
use crate::preferences::models::{
    Audience, CollectionsPatch, EmailTemplate, SavedEmail, Signature, Tone, UserPreferences,
};

/// Raw row shape; the JSONB columns decode through `sqlx::types::Json`.
#[derive(Debug, FromRow)]
struct PreferencesRow {
    user_id: String,
    tones: Json<Vec<Tone>>,
    audiences: Json<Vec<Audience>>,
    templates: Json<Vec<EmailTemplate>>,
    saved_emails: Json<Vec<SavedEmail>>,
    signatures: Json<Vec<Signature>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PreferencesRow> for UserPreferences {
    fn from(row: PreferencesRow) -> Self {
        UserPreferences {
            user_id: row.user_id,
            tones: row.tones.0,
            audiences: row.audiences.0,
            templates: row.templates.0,
            saved_emails: row.saved_emails.0,
            signatures: row.signatures.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const INSERT_DEFAULTS: &str = "\
INSERT INTO user_preferences (user_id, tones, audiences, templates, saved_emails, signatures) \
VALUES ($1, $2, $3, $4, $5, $6) \
ON CONFLICT (user_id) DO NOTHING";

#[derive(Clone)]
pub struct PreferencesStore {
    pool: PgPool,
}

impl PreferencesStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the stored document, if any.
    pub async fn find_by_user(&self, user_id: &str) -> Result<Option<UserPreferences>, AppError> {
        let row: Option<PreferencesRow> =
            sqlx::query_as("SELECT * FROM user_preferences WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(UserPreferences::from))
    }

    /// Fetches the document, materializing the default document the first
    /// time a user is seen. Concurrent first reads converge on a single row
    /// via `ON CONFLICT DO NOTHING`.
    pub async fn get_or_create(&self, user_id: &str) -> Result<UserPreferences, AppError> {
        if let Some(prefs) = self.find_by_user(user_id).await? {
            return Ok(prefs);
        }

        let fresh = defaults::default_document(user_id);
        sqlx::query(INSERT_DEFAULTS)
            .bind(user_id)
            .bind(Json(&fresh.tones))
            .bind(Json(&fresh.audiences))
            .bind(Json(&fresh.templates))
            .bind(Json(&fresh.saved_emails))
            .bind(Json(&fresh.signatures))
            .execute(&self.pool)
            .await?;

        info!("Created default preference document for user {user_id}");

        // Re-read rather than returning `fresh`: a concurrent request may
        // have won the insert, and the row carries the database timestamps.
        self.find_by_user(user_id).await?.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "preference row missing after insert for user {user_id}"
            ))
        })
    }

    /// Runs a read-modify-write against the user's document under a row lock.
    ///
    /// The row is created with defaults first if this user has never been
    /// seen. The closure validates and mutates the in-memory document; `Err`
    /// rolls the transaction back with the stored document untouched. On
    /// `Ok` the whole document is written back and returned alongside the
    /// closure's output.
    pub async fn update_with<T>(
        &self,
        user_id: &str,
        mutate: impl FnOnce(&mut UserPreferences) -> Result<T, AppError>,
    ) -> Result<(UserPreferences, T), AppError> {
        let mut tx = self.pool.begin().await?;

        let fresh = defaults::default_document(user_id);
        sqlx::query(INSERT_DEFAULTS)
            .bind(user_id)
            .bind(Json(&fresh.tones))
            .bind(Json(&fresh.audiences))
            .bind(Json(&fresh.templates))
            .bind(Json(&fresh.saved_emails))
            .bind(Json(&fresh.signatures))
            .execute(&mut *tx)
            .await?;

        let row: PreferencesRow =
            sqlx::query_as("SELECT * FROM user_preferences WHERE user_id = $1 FOR UPDATE")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;
        let mut prefs = UserPreferences::from(row);

        let out = mutate(&mut prefs)?;

        let updated_at: DateTime<Utc> = sqlx::query_scalar(
            "UPDATE user_preferences \
             SET tones = $2, audiences = $3, templates = $4, saved_emails = $5, signatures = $6, \
                 updated_at = now() \
             WHERE user_id = $1 \
             RETURNING updated_at",
        )
        .bind(user_id)
        .bind(Json(&prefs.tones))
        .bind(Json(&prefs.audiences))
        .bind(Json(&prefs.templates))
        .bind(Json(&prefs.saved_emails))
        .bind(Json(&prefs.signatures))
        .fetch_one(&mut *tx)
        .await?;
        prefs.updated_at = updated_at;

        tx.commit().await?;

        Ok((prefs, out))
    }

    /// Single-statement upsert replacing the supplied collections wholesale.
    /// Absent collections keep their stored value, or start from defaults
    /// when the row is new. This path skips per-item rules; reset uses it to
    /// swap in the default set atomically.
    pub async fn upsert_collections(
        &self,
        user_id: &str,
        patch: CollectionsPatch,
    ) -> Result<UserPreferences, AppError> {
        let fresh = defaults::default_document(user_id);

        let row: PreferencesRow = sqlx::query_as(
            "INSERT INTO user_preferences (user_id, tones, audiences, templates, saved_emails, signatures) \
             VALUES ($1, COALESCE($2, $7), COALESCE($3, $8), COALESCE($4, $9), \
                     COALESCE($5, $10), COALESCE($6, $11)) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 tones        = COALESCE($2, user_preferences.tones), \
                 audiences    = COALESCE($3, user_preferences.audiences), \
                 templates    = COALESCE($4, user_preferences.templates), \
                 saved_emails = COALESCE($5, user_preferences.saved_emails), \
                 signatures   = COALESCE($6, user_preferences.signatures), \
                 updated_at   = now() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(patch.tones.map(Json))
        .bind(patch.audiences.map(Json))
        .bind(patch.templates.map(Json))
        .bind(patch.saved_emails.map(Json))
        .bind(patch.signatures.map(Json))
        .bind(Json(&fresh.tones))
        .bind(Json(&fresh.audiences))
        .bind(Json(&fresh.templates))
        .bind(Json(&fresh.saved_emails))
        .bind(Json(&fresh.signatures))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
