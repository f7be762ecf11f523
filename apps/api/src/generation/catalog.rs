//! Built-in catalog served by the public tone/audience/template endpoints.
//!
//! These are the starter lists an unauthenticated client can browse. The
//! per-user collections in the preferences module start from similar seeds
//! but diverge as the user edits them; nothing here reads user state.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogTone {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogAudience {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt: &'static str,
}

pub const TONES: &[CatalogTone] = &[
    CatalogTone {
        id: "professional",
        label: "Professional",
        description: "Clear, direct, business-appropriate",
    },
    CatalogTone {
        id: "friendly",
        label: "Friendly",
        description: "Warm, approachable, conversational",
    },
    CatalogTone {
        id: "formal",
        label: "Formal",
        description: "Respectful, structured, traditional",
    },
    CatalogTone {
        id: "persuasive",
        label: "Persuasive",
        description: "Compelling, action-oriented",
    },
];

pub const AUDIENCES: &[CatalogAudience] = &[
    CatalogAudience {
        id: "professor",
        label: "Professor",
        description: "Academic and respectful tone",
    },
    CatalogAudience {
        id: "student",
        label: "Student",
        description: "Casual but professional",
    },
    CatalogAudience {
        id: "coach",
        label: "Coach/Trainer",
        description: "Respectful and direct",
    },
    CatalogAudience {
        id: "professional",
        label: "Professional",
        description: "Business-appropriate",
    },
];

pub const TEMPLATES: &[CatalogTemplate] = &[
    CatalogTemplate {
        id: "thank-you",
        name: "Thank You Email",
        prompt: "Write a thank you email",
    },
    CatalogTemplate {
        id: "meeting-request",
        name: "Meeting Request",
        prompt: "Request a meeting to discuss",
    },
    CatalogTemplate {
        id: "follow-up",
        name: "Follow Up",
        prompt: "Write a follow-up email",
    },
    CatalogTemplate {
        id: "introduction",
        name: "Introduction",
        prompt: "Write an introduction email",
    },
    CatalogTemplate {
        id: "apology",
        name: "Apology",
        prompt: "Write an apology email for",
    },
    CatalogTemplate {
        id: "feedback-request",
        name: "Feedback Request",
        prompt: "Request feedback on",
    },
];
