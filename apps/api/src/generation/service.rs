//! Email generation: validate, format the fixed prompt, call the model.
//!
//! Failure wording is decided here, once. Provider detail goes to the log;
//! the client sees only "Service unavailable" (no credential configured) or
//! a generic generation failure.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::prompts::build_email_prompt;
use crate::llm_client::LlmClient;

/// The three generation parameters. Tone and audience are open descriptive
/// strings — "slightly exasperated but polite" is as valid as "formal".
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub prompt: String,
    pub tone: String,
    pub audience: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationMetadata {
    pub tone: String,
    pub audience: String,
    /// ISO-8601 instant the draft was produced.
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedEmail {
    /// The full draft, subject line included, exactly as the model wrote it.
    pub email: String,
    pub metadata: GenerationMetadata,
}

/// Holds the optional model client. Built once in `main`; `None` (no
/// credential at startup) keeps the API serving with generation degraded
/// rather than refusing to boot.
#[derive(Clone)]
pub struct EmailGenerator {
    llm: Option<LlmClient>,
}

impl EmailGenerator {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    /// Validates the request, formats the prompt and calls the model.
    ///
    /// Field validation runs before the availability check, so an empty
    /// prompt is reported as a validation error even on a degraded instance.
    pub async fn generate(&self, request: &EmailRequest) -> Result<GeneratedEmail, AppError> {
        let prompt = request.prompt.trim();
        let tone = request.tone.trim();
        let audience = request.audience.trim();

        if prompt.is_empty() || tone.is_empty() || audience.is_empty() {
            return Err(AppError::Validation("Invalid request".to_string()));
        }

        let Some(llm) = &self.llm else {
            return Err(AppError::Generation("Service unavailable".to_string()));
        };

        info!("Generating email - tone: {tone}, audience: {audience}");

        let formatted = build_email_prompt(prompt, tone, audience);
        let draft = llm.complete(&formatted).await.map_err(|e| {
            error!("Email generation failed: {e}");
            AppError::Generation("An error occurred while generating the email".to_string())
        })?;

        Ok(GeneratedEmail {
            email: draft.trim().to_string(),
            metadata: GenerationMetadata {
                tone: tone.to_string(),
                audience: audience.to_string(),
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        })
    }
}
