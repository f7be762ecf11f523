//! Preference document types, serialized camelCase to match the Angular
//! client's wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A writing-style preset. `color` is a Tailwind class the client renders
/// the chip with; the API stores it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub id: String,
    pub label: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A recipient category. `icon` is a client-side icon name, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audience {
    pub id: String,
    pub label: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A reusable prompt starter. Templates added through the API are always
/// flagged custom; only the built-in defaults carry `isCustom: false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    pub id: String,
    pub name: String,
    pub prompt: String,
    #[serde(default)]
    pub is_custom: bool,
}

/// Where a saved email came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailSource {
    Ai,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEmail {
    /// Server-assigned, `email_<epoch-millis>`. Unique within the user's list.
    pub id: String,
    pub subject: String,
    pub content: String,
    /// Free-text tone label as used at generation time, not a `Tone` id.
    pub tone: String,
    pub audience: String,
    pub timestamp: DateTime<Utc>,
    pub source: EmailSource,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub id: String,
    pub name: String,
    pub content: String,
    /// At most one signature per user carries this flag.
    #[serde(default)]
    pub is_default: bool,
}

/// The full per-user preference document. One of these exists per `sub`
/// claim ever seen; reads materialize it with defaults on first contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub user_id: String,
    pub tones: Vec<Tone>,
    pub audiences: Vec<Audience>,
    pub templates: Vec<EmailTemplate>,
    pub saved_emails: Vec<SavedEmail>,
    pub signatures: Vec<Signature>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for POST /api/preferences/emails. The server assigns id and
/// timestamp, so the client sends neither.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedEmail {
    pub subject: String,
    pub content: String,
    pub tone: String,
    pub audience: String,
    pub source: EmailSource,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Partial update for PUT /api/preferences/emails/:id. Absent fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEmailPatch {
    pub subject: Option<String>,
    pub content: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub source: Option<EmailSource>,
    pub is_favorite: Option<bool>,
}

/// Partial-field payload for the store's upsert. `None` leaves a collection
/// as stored; a fresh row fills absent collections from the defaults.
#[derive(Debug, Clone, Default)]
pub struct CollectionsPatch {
    pub tones: Option<Vec<Tone>>,
    pub audiences: Option<Vec<Audience>>,
    pub templates: Option<Vec<EmailTemplate>>,
    pub saved_emails: Option<Vec<SavedEmail>>,
    pub signatures: Option<Vec<Signature>>,
}
