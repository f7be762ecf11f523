//! Pure mutation rules for the preference collections.
//!
//! Every function here validates before it mutates: on `Err` the document is
//! bit-for-bit what it was, so a caller can persist unconditionally on `Ok`.
//! Nothing in this module does IO, which keeps the rules testable without a
//! database.

use chrono::Utc;

use crate::errors::AppError;
use crate::preferences::models::{
    Audience, EmailTemplate, NewSavedEmail, SavedEmail, SavedEmailPatch, Signature, Tone,
    UserPreferences,
};

/// Cardinality bounds for one collection, plus the nouns its client-facing
/// messages use.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
    singular: &'static str,
    plural: &'static str,
}

pub const TONES: Bounds = Bounds {
    min: 1,
    max: 8,
    singular: "tone",
    plural: "tones",
};

pub const AUDIENCES: Bounds = Bounds {
    min: 1,
    max: 8,
    singular: "audience",
    plural: "audiences",
};

pub const TEMPLATES: Bounds = Bounds {
    min: 1,
    max: 8,
    singular: "template",
    plural: "templates",
};

pub const SAVED_EMAILS: Bounds = Bounds {
    min: 0,
    max: 8,
    singular: "saved email",
    plural: "saved emails",
};

pub const SIGNATURES: Bounds = Bounds {
    min: 1,
    max: 8,
    singular: "signature",
    plural: "signatures",
};

/// Id accessor shared by the five item types so the checks below stay generic.
trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Tone {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Audience {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for EmailTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for SavedEmail {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Signature {
    fn id(&self) -> &str {
        &self.id
    }
}

fn ensure_capacity<T>(items: &[T], bounds: Bounds) -> Result<(), AppError> {
    if items.len() >= bounds.max {
        return Err(AppError::Validation(format!(
            "Maximum {} {} allowed",
            bounds.max, bounds.plural
        )));
    }
    Ok(())
}

fn ensure_floor<T>(items: &[T], bounds: Bounds) -> Result<(), AppError> {
    if items.len() <= bounds.min {
        return Err(AppError::Validation(format!(
            "Minimum {} {} required",
            bounds.min, bounds.singular
        )));
    }
    Ok(())
}

fn ensure_new_id<T: HasId>(items: &[T], id: &str, bounds: Bounds) -> Result<(), AppError> {
    if items.iter().any(|item| item.id() == id) {
        return Err(AppError::Validation(format!(
            "Duplicate {} id '{}'",
            bounds.singular, id
        )));
    }
    Ok(())
}

/// Wholesale replacement used by the PUT endpoints. Rejects out-of-bounds
/// lengths and duplicate ids within the submitted list.
fn replace_collection<T: HasId>(
    target: &mut Vec<T>,
    incoming: Vec<T>,
    bounds: Bounds,
) -> Result<(), AppError> {
    if incoming.len() > bounds.max {
        return Err(AppError::Validation(format!(
            "Maximum {} {} allowed",
            bounds.max, bounds.plural
        )));
    }
    if incoming.len() < bounds.min {
        return Err(AppError::Validation(format!(
            "Minimum {} {} required",
            bounds.min, bounds.singular
        )));
    }
    for (i, item) in incoming.iter().enumerate() {
        if incoming[..i].iter().any(|other| other.id() == item.id()) {
            return Err(AppError::Validation(format!(
                "Duplicate {} id '{}'",
                bounds.singular,
                item.id()
            )));
        }
    }

    *target = incoming;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tones
// ────────────────────────────────────────────────────────────────────────────

pub fn add_tone(doc: &mut UserPreferences, tone: Tone) -> Result<(), AppError> {
    ensure_capacity(&doc.tones, TONES)?;
    ensure_new_id(&doc.tones, &tone.id, TONES)?;
    doc.tones.push(tone);
    Ok(())
}

/// Deleting below the floor is rejected before the id is even looked at;
/// above the floor, an unknown id is a no-op.
pub fn delete_tone(doc: &mut UserPreferences, tone_id: &str) -> Result<(), AppError> {
    ensure_floor(&doc.tones, TONES)?;
    doc.tones.retain(|t| t.id != tone_id);
    Ok(())
}

pub fn replace_tones(doc: &mut UserPreferences, tones: Vec<Tone>) -> Result<(), AppError> {
    replace_collection(&mut doc.tones, tones, TONES)
}

// ────────────────────────────────────────────────────────────────────────────
// Audiences
// ────────────────────────────────────────────────────────────────────────────

pub fn add_audience(doc: &mut UserPreferences, audience: Audience) -> Result<(), AppError> {
    ensure_capacity(&doc.audiences, AUDIENCES)?;
    ensure_new_id(&doc.audiences, &audience.id, AUDIENCES)?;
    doc.audiences.push(audience);
    Ok(())
}

pub fn delete_audience(doc: &mut UserPreferences, audience_id: &str) -> Result<(), AppError> {
    ensure_floor(&doc.audiences, AUDIENCES)?;
    doc.audiences.retain(|a| a.id != audience_id);
    Ok(())
}

pub fn replace_audiences(
    doc: &mut UserPreferences,
    audiences: Vec<Audience>,
) -> Result<(), AppError> {
    replace_collection(&mut doc.audiences, audiences, AUDIENCES)
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// User-added templates are always custom, whatever the client claimed.
pub fn add_template(doc: &mut UserPreferences, template: EmailTemplate) -> Result<(), AppError> {
    ensure_capacity(&doc.templates, TEMPLATES)?;
    ensure_new_id(&doc.templates, &template.id, TEMPLATES)?;
    doc.templates.push(EmailTemplate {
        is_custom: true,
        ..template
    });
    Ok(())
}

pub fn delete_template(doc: &mut UserPreferences, template_id: &str) -> Result<(), AppError> {
    ensure_floor(&doc.templates, TEMPLATES)?;
    doc.templates.retain(|t| t.id != template_id);
    Ok(())
}

pub fn replace_templates(
    doc: &mut UserPreferences,
    templates: Vec<EmailTemplate>,
) -> Result<(), AppError> {
    replace_collection(&mut doc.templates, templates, TEMPLATES)
}

// ────────────────────────────────────────────────────────────────────────────
// Saved emails
// ────────────────────────────────────────────────────────────────────────────

/// Builds the stored email from the client payload, assigning the id and
/// creation timestamp server-side, and appends it.
pub fn save_email(doc: &mut UserPreferences, new: NewSavedEmail) -> Result<(), AppError> {
    ensure_capacity(&doc.saved_emails, SAVED_EMAILS)?;

    let now = Utc::now();
    doc.saved_emails.push(SavedEmail {
        id: mint_email_id(&doc.saved_emails, now.timestamp_millis()),
        subject: new.subject,
        content: new.content,
        tone: new.tone,
        audience: new.audience,
        timestamp: now,
        source: new.source,
        is_favorite: new.is_favorite,
    });
    Ok(())
}

/// Ids follow `email_<epoch-millis>`. Two saves inside the same millisecond
/// would collide, so the candidate is bumped until it is free.
fn mint_email_id(existing: &[SavedEmail], epoch_millis: i64) -> String {
    let mut candidate = epoch_millis;
    loop {
        let id = format!("email_{candidate}");
        if !existing.iter().any(|e| e.id == id) {
            return id;
        }
        candidate += 1;
    }
}

/// Applies the supplied fields to the matching email. An unknown id is an
/// error here, unlike deletion: the client is updating something it believes
/// exists.
pub fn update_email(
    doc: &mut UserPreferences,
    email_id: &str,
    patch: SavedEmailPatch,
) -> Result<(), AppError> {
    let email = doc
        .saved_emails
        .iter_mut()
        .find(|e| e.id == email_id)
        .ok_or_else(|| AppError::ItemNotFound("Email not found".to_string()))?;

    if let Some(subject) = patch.subject {
        email.subject = subject;
    }
    if let Some(content) = patch.content {
        email.content = content;
    }
    if let Some(tone) = patch.tone {
        email.tone = tone;
    }
    if let Some(audience) = patch.audience {
        email.audience = audience;
    }
    if let Some(source) = patch.source {
        email.source = source;
    }
    if let Some(is_favorite) = patch.is_favorite {
        email.is_favorite = is_favorite;
    }
    Ok(())
}

/// No floor on saved emails, so deletion always succeeds; unknown ids are a
/// no-op.
pub fn delete_email(doc: &mut UserPreferences, email_id: &str) {
    doc.saved_emails.retain(|e| e.id != email_id);
}

/// Flips the favorite flag on the matching email. Returns false when the id
/// is unknown, leaving the collection untouched.
pub fn toggle_email_favorite(doc: &mut UserPreferences, email_id: &str) -> bool {
    match doc.saved_emails.iter_mut().find(|e| e.id == email_id) {
        Some(email) => {
            email.is_favorite = !email.is_favorite;
            true
        }
        None => false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Signatures
// ────────────────────────────────────────────────────────────────────────────

/// Adding a signature flagged default demotes whichever signature held the
/// flag before, keeping at most one default.
pub fn add_signature(doc: &mut UserPreferences, signature: Signature) -> Result<(), AppError> {
    ensure_capacity(&doc.signatures, SIGNATURES)?;
    ensure_new_id(&doc.signatures, &signature.id, SIGNATURES)?;

    if signature.is_default {
        for existing in &mut doc.signatures {
            existing.is_default = false;
        }
    }
    doc.signatures.push(signature);
    Ok(())
}

/// When the deleted signature was the default, the first remaining signature
/// is promoted so the user is never left without one.
pub fn delete_signature(doc: &mut UserPreferences, signature_id: &str) -> Result<(), AppError> {
    ensure_floor(&doc.signatures, SIGNATURES)?;

    let was_default = doc
        .signatures
        .iter()
        .any(|s| s.id == signature_id && s.is_default);
    doc.signatures.retain(|s| s.id != signature_id);

    if was_default {
        if let Some(first) = doc.signatures.first_mut() {
            first.is_default = true;
        }
    }
    Ok(())
}

pub fn replace_signatures(
    doc: &mut UserPreferences,
    signatures: Vec<Signature>,
) -> Result<(), AppError> {
    if signatures.iter().filter(|s| s.is_default).count() > 1 {
        return Err(AppError::Validation(
            "Only one default signature allowed".to_string(),
        ));
    }
    replace_collection(&mut doc.signatures, signatures, SIGNATURES)
}

/// Makes the matching signature the sole default. Returns false when the id
/// is unknown, leaving every flag as it was.
pub fn set_default_signature(doc: &mut UserPreferences, signature_id: &str) -> bool {
    if !doc.signatures.iter().any(|s| s.id == signature_id) {
        return false;
    }
    for signature in &mut doc.signatures {
        signature.is_default = signature.id == signature_id;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::preferences::defaults;
    use crate::preferences::models::EmailSource;

    fn doc() -> UserPreferences {
        defaults::default_document("auth0|user-1")
    }

    fn tone(id: &str) -> Tone {
        Tone {
            id: id.to_string(),
            label: id.to_string(),
            color: "bg-gray-500".to_string(),
            description: None,
        }
    }

    fn audience(id: &str) -> Audience {
        Audience {
            id: id.to_string(),
            label: id.to_string(),
            icon: "user".to_string(),
            description: None,
        }
    }

    fn template(id: &str) -> EmailTemplate {
        EmailTemplate {
            id: id.to_string(),
            name: id.to_string(),
            prompt: format!("Write about {id}"),
            is_custom: false,
        }
    }

    fn signature(id: &str, is_default: bool) -> Signature {
        Signature {
            id: id.to_string(),
            name: id.to_string(),
            content: format!("Regards,\n{id}"),
            is_default,
        }
    }

    fn new_email(subject: &str) -> NewSavedEmail {
        NewSavedEmail {
            subject: subject.to_string(),
            content: "Hello there".to_string(),
            tone: "professional".to_string(),
            audience: "professor".to_string(),
            source: EmailSource::Ai,
            is_favorite: false,
        }
    }

    // ── capacity and floor ──────────────────────────────────────────────────

    #[test]
    fn test_add_tone_up_to_capacity() {
        let mut doc = doc();
        for i in 4..8 {
            add_tone(&mut doc, tone(&format!("t{i}"))).unwrap();
        }
        assert_eq!(doc.tones.len(), 8);
    }

    #[test]
    fn test_ninth_tone_rejected_and_doc_unchanged() {
        let mut doc = doc();
        for i in 4..8 {
            add_tone(&mut doc, tone(&format!("t{i}"))).unwrap();
        }
        let before = doc.clone();

        let err = add_tone(&mut doc, tone("t9")).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Maximum 8 tones allowed");
        assert_eq!(doc, before);
    }

    #[test]
    fn test_delete_last_tone_rejected() {
        let mut doc = doc();
        doc.tones.truncate(1);
        let before = doc.clone();

        let err = delete_tone(&mut doc, "professional").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Minimum 1 tone required");
        assert_eq!(doc, before);
    }

    #[test]
    fn test_delete_at_floor_rejected_even_for_unknown_id() {
        let mut doc = doc();
        doc.tones.truncate(1);

        assert!(delete_tone(&mut doc, "no-such-tone").is_err());
        assert_eq!(doc.tones.len(), 1);
    }

    #[test]
    fn test_delete_unknown_tone_above_floor_is_noop() {
        let mut doc = doc();
        let before = doc.clone();

        delete_tone(&mut doc, "no-such-tone").unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn test_ninth_audience_rejected() {
        let mut doc = doc();
        for i in 4..8 {
            add_audience(&mut doc, audience(&format!("a{i}"))).unwrap();
        }

        let err = add_audience(&mut doc, audience("a9")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Maximum 8 audiences allowed"
        );
    }

    #[test]
    fn test_delete_last_template_rejected() {
        let mut doc = doc();
        doc.templates.truncate(1);

        let err = delete_template(&mut doc, "thank-you").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Minimum 1 template required"
        );
    }

    #[test]
    fn test_ninth_saved_email_rejected() {
        let mut doc = doc();
        for i in 0..8 {
            save_email(&mut doc, new_email(&format!("Subject {i}"))).unwrap();
        }
        let before = doc.clone();

        let err = save_email(&mut doc, new_email("One too many")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Maximum 8 saved emails allowed"
        );
        assert_eq!(doc, before);
    }

    // ── duplicate ids ───────────────────────────────────────────────────────

    #[test]
    fn test_add_duplicate_tone_id_rejected() {
        let mut doc = doc();
        let before = doc.clone();

        let err = add_tone(&mut doc, tone("professional")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Duplicate tone id 'professional'"
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_replace_with_duplicate_ids_rejected() {
        let mut doc = doc();
        let before = doc.clone();

        let err = replace_tones(&mut doc, vec![tone("a"), tone("b"), tone("a")]).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Duplicate tone id 'a'");
        assert_eq!(doc, before);
    }

    // ── wholesale replacement ───────────────────────────────────────────────

    #[test]
    fn test_replace_tones_swaps_collection() {
        let mut doc = doc();
        replace_tones(&mut doc, vec![tone("pirate"), tone("poet")]).unwrap();

        assert_eq!(doc.tones.len(), 2);
        assert_eq!(doc.tones[0].id, "pirate");
    }

    #[test]
    fn test_replace_tones_with_empty_list_rejected() {
        let mut doc = doc();
        let before = doc.clone();

        let err = replace_tones(&mut doc, Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Minimum 1 tone required");
        assert_eq!(doc, before);
    }

    #[test]
    fn test_replace_tones_beyond_capacity_rejected() {
        let mut doc = doc();
        let nine = (0..9).map(|i| tone(&format!("t{i}"))).collect();

        let err = replace_tones(&mut doc, nine).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Maximum 8 tones allowed");
    }

    #[test]
    fn test_replace_audiences_swaps_collection() {
        let mut doc = doc();
        replace_audiences(&mut doc, vec![audience("clients")]).unwrap();
        assert_eq!(doc.audiences.len(), 1);
    }

    #[test]
    fn test_replace_templates_keeps_submitted_custom_flags() {
        let mut doc = doc();
        let mut custom = template("mine");
        custom.is_custom = true;
        replace_templates(&mut doc, vec![template("stock"), custom]).unwrap();

        assert!(!doc.templates[0].is_custom);
        assert!(doc.templates[1].is_custom);
    }

    // ── templates ───────────────────────────────────────────────────────────

    #[test]
    fn test_add_template_forces_custom_flag() {
        let mut doc = doc();
        add_template(&mut doc, template("weekly-report")).unwrap();

        let added = doc.templates.iter().find(|t| t.id == "weekly-report").unwrap();
        assert!(added.is_custom);
    }

    // ── saved emails ────────────────────────────────────────────────────────

    #[test]
    fn test_save_email_assigns_id_and_timestamp() {
        let mut doc = doc();
        save_email(&mut doc, new_email("Hello")).unwrap();

        let saved = &doc.saved_emails[0];
        assert!(saved.id.starts_with("email_"));
        assert!(saved.id["email_".len()..].parse::<i64>().is_ok());
        assert_eq!(saved.subject, "Hello");
    }

    #[test]
    fn test_same_millisecond_saves_get_distinct_ids() {
        let mut doc = doc();
        let millis = Utc::now().timestamp_millis();
        // Seed an email with the id the next save would naturally take.
        doc.saved_emails.push(SavedEmail {
            id: format!("email_{millis}"),
            subject: "First".to_string(),
            content: "x".to_string(),
            tone: "formal".to_string(),
            audience: "student".to_string(),
            timestamp: Utc::now(),
            source: EmailSource::Manual,
            is_favorite: false,
        });

        let id = mint_email_id(&doc.saved_emails, millis);
        assert_eq!(id, format!("email_{}", millis + 1));
    }

    #[test]
    fn test_update_email_merges_supplied_fields() {
        let mut doc = doc();
        save_email(&mut doc, new_email("Before")).unwrap();
        let id = doc.saved_emails[0].id.clone();

        update_email(
            &mut doc,
            &id,
            SavedEmailPatch {
                subject: Some("After".to_string()),
                is_favorite: Some(true),
                ..SavedEmailPatch::default()
            },
        )
        .unwrap();

        let email = &doc.saved_emails[0];
        assert_eq!(email.subject, "After");
        assert!(email.is_favorite);
        assert_eq!(email.content, "Hello there"); // untouched
        assert_eq!(email.source, EmailSource::Ai);
    }

    #[test]
    fn test_update_unknown_email_rejected() {
        let mut doc = doc();
        save_email(&mut doc, new_email("Only one")).unwrap();
        let before = doc.clone();

        let err = update_email(&mut doc, "email_0", SavedEmailPatch::default()).unwrap_err();
        assert_eq!(err.to_string(), "Email not found");
        assert_eq!(doc, before);
    }

    #[test]
    fn test_delete_email_always_succeeds() {
        let mut doc = doc();
        save_email(&mut doc, new_email("Gone soon")).unwrap();
        let id = doc.saved_emails[0].id.clone();

        delete_email(&mut doc, &id);
        assert!(doc.saved_emails.is_empty());

        // Empty collection, unknown id: still fine.
        delete_email(&mut doc, "email_0");
        assert!(doc.saved_emails.is_empty());
    }

    #[test]
    fn test_toggle_favorite_twice_round_trips() {
        let mut doc = doc();
        save_email(&mut doc, new_email("Flip me")).unwrap();
        let id = doc.saved_emails[0].id.clone();

        assert!(toggle_email_favorite(&mut doc, &id));
        assert!(doc.saved_emails[0].is_favorite);
        assert!(toggle_email_favorite(&mut doc, &id));
        assert!(!doc.saved_emails[0].is_favorite);
    }

    #[test]
    fn test_toggle_unknown_email_reports_not_found() {
        let mut doc = doc();
        let before = doc.clone();

        assert!(!toggle_email_favorite(&mut doc, "email_0"));
        assert_eq!(doc, before);
    }

    // ── signatures ──────────────────────────────────────────────────────────

    #[test]
    fn test_add_default_signature_demotes_previous_default() {
        let mut doc = doc();
        add_signature(&mut doc, signature("casual", true)).unwrap();

        assert_eq!(doc.signatures.iter().filter(|s| s.is_default).count(), 1);
        assert!(doc.signatures.iter().find(|s| s.id == "casual").unwrap().is_default);
        assert!(
            !doc.signatures
                .iter()
                .find(|s| s.id == "default-professional")
                .unwrap()
                .is_default
        );
    }

    #[test]
    fn test_add_non_default_signature_keeps_existing_default() {
        let mut doc = doc();
        add_signature(&mut doc, signature("casual", false)).unwrap();

        assert!(
            doc.signatures
                .iter()
                .find(|s| s.id == "default-professional")
                .unwrap()
                .is_default
        );
    }

    #[test]
    fn test_rejected_default_signature_leaves_flags_alone() {
        let mut doc = doc();
        for i in 0..7 {
            add_signature(&mut doc, signature(&format!("s{i}"), false)).unwrap();
        }
        assert_eq!(doc.signatures.len(), 8);
        let before = doc.clone();

        // At capacity: the new default must not demote anything on the way out.
        let err = add_signature(&mut doc, signature("s8", true)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Maximum 8 signatures allowed"
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_set_default_signature_is_exclusive() {
        let mut doc = doc();
        add_signature(&mut doc, signature("casual", false)).unwrap();

        assert!(set_default_signature(&mut doc, "casual"));
        assert_eq!(doc.signatures.iter().filter(|s| s.is_default).count(), 1);
        assert!(doc.signatures.iter().find(|s| s.id == "casual").unwrap().is_default);
    }

    #[test]
    fn test_set_default_unknown_signature_changes_nothing() {
        let mut doc = doc();
        let before = doc.clone();

        assert!(!set_default_signature(&mut doc, "no-such-signature"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_delete_default_signature_promotes_first_remaining() {
        let mut doc = doc();
        add_signature(&mut doc, signature("casual", false)).unwrap();
        add_signature(&mut doc, signature("terse", false)).unwrap();

        delete_signature(&mut doc, "default-professional").unwrap();

        assert_eq!(doc.signatures.len(), 2);
        assert!(doc.signatures[0].is_default);
        assert_eq!(doc.signatures[0].id, "casual");
        assert_eq!(doc.signatures.iter().filter(|s| s.is_default).count(), 1);
    }

    #[test]
    fn test_delete_non_default_signature_keeps_default() {
        let mut doc = doc();
        add_signature(&mut doc, signature("casual", false)).unwrap();

        delete_signature(&mut doc, "casual").unwrap();

        assert_eq!(doc.signatures.len(), 1);
        assert!(doc.signatures[0].is_default);
    }

    #[test]
    fn test_delete_last_signature_rejected() {
        let mut doc = doc();
        let before = doc.clone();

        let err = delete_signature(&mut doc, "default-professional").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Minimum 1 signature required"
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_replace_signatures_with_two_defaults_rejected() {
        let mut doc = doc();
        let before = doc.clone();

        let err = replace_signatures(
            &mut doc,
            vec![signature("a", true), signature("b", true)],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Only one default signature allowed"
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_replace_signatures_allows_zero_defaults() {
        let mut doc = doc();
        replace_signatures(&mut doc, vec![signature("a", false), signature("b", false)]).unwrap();

        assert_eq!(doc.signatures.len(), 2);
        assert_eq!(doc.signatures.iter().filter(|s| s.is_default).count(), 0);
    }
}
