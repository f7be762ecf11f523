//! Built-in collections seeded into every new preference document.
//!
//! These mirror the starter lists the client ships with, so a first-time
//! user sees the same choices before and after their document exists.

use chrono::Utc;

use crate::preferences::models::{
    Audience, CollectionsPatch, EmailTemplate, Signature, Tone, UserPreferences,
};

pub fn default_tones() -> Vec<Tone> {
    vec![
        Tone {
            id: "professional".to_string(),
            label: "Professional".to_string(),
            color: "bg-blue-500".to_string(),
            description: Some("Clear and direct".to_string()),
        },
        Tone {
            id: "friendly".to_string(),
            label: "Friendly".to_string(),
            color: "bg-green-500".to_string(),
            description: Some("Warm and approachable".to_string()),
        },
        Tone {
            id: "formal".to_string(),
            label: "Formal".to_string(),
            color: "bg-purple-500".to_string(),
            description: Some("Respectful and structured".to_string()),
        },
        Tone {
            id: "persuasive".to_string(),
            label: "Persuasive".to_string(),
            color: "bg-orange-500".to_string(),
            description: Some("Compelling".to_string()),
        },
    ]
}

pub fn default_audiences() -> Vec<Audience> {
    vec![
        Audience {
            id: "professor".to_string(),
            label: "Professor".to_string(),
            icon: "graduation-cap".to_string(),
            description: None,
        },
        Audience {
            id: "student".to_string(),
            label: "Student".to_string(),
            icon: "user".to_string(),
            description: None,
        },
        Audience {
            id: "coach".to_string(),
            label: "Coach/Trainer".to_string(),
            icon: "users".to_string(),
            description: None,
        },
        Audience {
            id: "professional".to_string(),
            label: "Professional".to_string(),
            icon: "briefcase".to_string(),
            description: None,
        },
    ]
}

pub fn default_templates() -> Vec<EmailTemplate> {
    vec![
        EmailTemplate {
            id: "thank-you".to_string(),
            name: "Thank You Email".to_string(),
            prompt: "Write a thank you email".to_string(),
            is_custom: false,
        },
        EmailTemplate {
            id: "meeting-request".to_string(),
            name: "Meeting Request".to_string(),
            prompt: "Request a meeting to discuss".to_string(),
            is_custom: false,
        },
        EmailTemplate {
            id: "follow-up".to_string(),
            name: "Follow Up".to_string(),
            prompt: "Write a follow-up email".to_string(),
            is_custom: false,
        },
        EmailTemplate {
            id: "introduction".to_string(),
            name: "Introduction".to_string(),
            prompt: "Write an introduction email".to_string(),
            is_custom: false,
        },
        EmailTemplate {
            id: "apology".to_string(),
            name: "Apology".to_string(),
            prompt: "Write an apology email for".to_string(),
            is_custom: false,
        },
        EmailTemplate {
            id: "feedback-request".to_string(),
            name: "Feedback Request".to_string(),
            prompt: "Request feedback on".to_string(),
            is_custom: false,
        },
    ]
}

pub fn default_signatures() -> Vec<Signature> {
    vec![Signature {
        id: "default-professional".to_string(),
        name: "Professional".to_string(),
        content: "Best regards,\n[Your Name]\n[Your Title]\n[Your Company]".to_string(),
        is_default: true,
    }]
}

/// The document a never-seen user receives: 4 tones, 4 audiences,
/// 6 templates, no saved emails, 1 default signature.
pub fn default_document(user_id: &str) -> UserPreferences {
    let now = Utc::now();
    UserPreferences {
        user_id: user_id.to_string(),
        tones: default_tones(),
        audiences: default_audiences(),
        templates: default_templates(),
        saved_emails: Vec::new(),
        signatures: default_signatures(),
        created_at: now,
        updated_at: now,
    }
}

/// Patch that swaps every collection back to the defaults in one write.
pub fn reset_patch() -> CollectionsPatch {
    CollectionsPatch {
        tones: Some(default_tones()),
        audiences: Some(default_audiences()),
        templates: Some(default_templates()),
        saved_emails: Some(Vec::new()),
        signatures: Some(default_signatures()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_counts() {
        let doc = default_document("auth0|user-1");
        assert_eq!(doc.tones.len(), 4);
        assert_eq!(doc.audiences.len(), 4);
        assert_eq!(doc.templates.len(), 6);
        assert_eq!(doc.saved_emails.len(), 0);
        assert_eq!(doc.signatures.len(), 1);
        assert_eq!(doc.user_id, "auth0|user-1");
    }

    #[test]
    fn test_exactly_one_default_signature() {
        let signatures = default_signatures();
        assert_eq!(signatures.iter().filter(|s| s.is_default).count(), 1);
        assert_eq!(signatures[0].id, "default-professional");
    }

    #[test]
    fn test_default_templates_are_not_custom() {
        assert!(default_templates().iter().all(|t| !t.is_custom));
    }

    #[test]
    fn test_default_ids_are_unique() {
        let doc = default_document("u");
        let unique = |ids: Vec<&str>| {
            let mut seen = ids.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len() == ids.len()
        };

        assert!(unique(doc.tones.iter().map(|t| t.id.as_str()).collect()));
        assert!(unique(doc.audiences.iter().map(|a| a.id.as_str()).collect()));
        assert!(unique(doc.templates.iter().map(|t| t.id.as_str()).collect()));
    }

    #[test]
    fn test_reset_patch_touches_every_collection() {
        let patch = reset_patch();
        assert!(patch.tones.is_some());
        assert!(patch.audiences.is_some());
        assert!(patch.templates.is_some());
        assert!(patch.saved_emails.is_some());
        assert!(patch.signatures.is_some());
    }
}
