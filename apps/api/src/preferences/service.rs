//! Persistence orchestration for the preference endpoints.
//!
//! Each method loads the caller's document under the store's row lock,
//! applies one rule from `ops`, and returns the full updated document; the
//! client re-renders from that single payload. Construction happens once in
//! `main`, and handlers reach the service through `AppState`.

use crate::errors::AppError;
use crate::preferences::defaults;
use crate::preferences::models::{
    Audience, EmailTemplate, NewSavedEmail, SavedEmailPatch, Signature, Tone, UserPreferences,
};
use crate::preferences::ops;
use crate::preferences::store::PreferencesStore;

#[derive(Clone)]
pub struct PreferencesService {
    store: PreferencesStore,
}

impl PreferencesService {
    pub fn new(store: PreferencesStore) -> Self {
        Self { store }
    }

    /// Get-or-create: a never-seen user receives the built-in defaults.
    pub async fn get_user_preferences(&self, user_id: &str) -> Result<UserPreferences, AppError> {
        self.store.get_or_create(user_id).await
    }

    // ────────────────────────────────────────────────────────────────────────
    // Tones
    // ────────────────────────────────────────────────────────────────────────

    pub async fn update_tones(
        &self,
        user_id: &str,
        tones: Vec<Tone>,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::replace_tones(doc, tones))
            .await?;
        Ok(prefs)
    }

    pub async fn add_tone(&self, user_id: &str, tone: Tone) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::add_tone(doc, tone))
            .await?;
        Ok(prefs)
    }

    pub async fn delete_tone(
        &self,
        user_id: &str,
        tone_id: &str,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::delete_tone(doc, tone_id))
            .await?;
        Ok(prefs)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Audiences
    // ────────────────────────────────────────────────────────────────────────

    pub async fn update_audiences(
        &self,
        user_id: &str,
        audiences: Vec<Audience>,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::replace_audiences(doc, audiences))
            .await?;
        Ok(prefs)
    }

    pub async fn add_audience(
        &self,
        user_id: &str,
        audience: Audience,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::add_audience(doc, audience))
            .await?;
        Ok(prefs)
    }

    pub async fn delete_audience(
        &self,
        user_id: &str,
        audience_id: &str,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::delete_audience(doc, audience_id))
            .await?;
        Ok(prefs)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Templates
    // ────────────────────────────────────────────────────────────────────────

    pub async fn update_templates(
        &self,
        user_id: &str,
        templates: Vec<EmailTemplate>,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::replace_templates(doc, templates))
            .await?;
        Ok(prefs)
    }

    pub async fn add_template(
        &self,
        user_id: &str,
        template: EmailTemplate,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::add_template(doc, template))
            .await?;
        Ok(prefs)
    }

    pub async fn delete_template(
        &self,
        user_id: &str,
        template_id: &str,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::delete_template(doc, template_id))
            .await?;
        Ok(prefs)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Saved emails
    // ────────────────────────────────────────────────────────────────────────

    pub async fn save_email(
        &self,
        user_id: &str,
        email: NewSavedEmail,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::save_email(doc, email))
            .await?;
        Ok(prefs)
    }

    pub async fn update_email(
        &self,
        user_id: &str,
        email_id: &str,
        patch: SavedEmailPatch,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::update_email(doc, email_id, patch))
            .await?;
        Ok(prefs)
    }

    pub async fn delete_email(
        &self,
        user_id: &str,
        email_id: &str,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| {
                ops::delete_email(doc, email_id);
                Ok(())
            })
            .await?;
        Ok(prefs)
    }

    /// `None` means the email id was unknown; the route answers
    /// `{"success": true, "data": null}` rather than an error.
    pub async fn toggle_email_favorite(
        &self,
        user_id: &str,
        email_id: &str,
    ) -> Result<Option<UserPreferences>, AppError> {
        let (prefs, found) = self
            .store
            .update_with(user_id, |doc| Ok(ops::toggle_email_favorite(doc, email_id)))
            .await?;
        Ok(found.then_some(prefs))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Signatures
    // ────────────────────────────────────────────────────────────────────────

    pub async fn update_signatures(
        &self,
        user_id: &str,
        signatures: Vec<Signature>,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::replace_signatures(doc, signatures))
            .await?;
        Ok(prefs)
    }

    pub async fn add_signature(
        &self,
        user_id: &str,
        signature: Signature,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::add_signature(doc, signature))
            .await?;
        Ok(prefs)
    }

    pub async fn delete_signature(
        &self,
        user_id: &str,
        signature_id: &str,
    ) -> Result<UserPreferences, AppError> {
        let (prefs, ()) = self
            .store
            .update_with(user_id, |doc| ops::delete_signature(doc, signature_id))
            .await?;
        Ok(prefs)
    }

    /// `None` means the signature id was unknown; no flags were changed.
    pub async fn set_default_signature(
        &self,
        user_id: &str,
        signature_id: &str,
    ) -> Result<Option<UserPreferences>, AppError> {
        let (prefs, found) = self
            .store
            .update_with(user_id, |doc| {
                Ok(ops::set_default_signature(doc, signature_id))
            })
            .await?;
        Ok(found.then_some(prefs))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Reset
    // ────────────────────────────────────────────────────────────────────────

    /// Overwrites all five collections with the built-in defaults in one
    /// atomic write. Works the same whether or not the user had a document.
    pub async fn reset_to_defaults(&self, user_id: &str) -> Result<UserPreferences, AppError> {
        self.store
            .upsert_collections(user_id, defaults::reset_patch())
            .await
    }
}
