use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails fast if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Auth0 tenant domain, e.g. `my-tenant.us.auth0.com`.
    pub auth0_domain: String,
    /// Expected `aud` claim on access tokens.
    pub auth0_audience: String,
    /// RSA public key (PEM) used to verify RS256 token signatures.
    pub auth0_public_key: String,
    /// Optional: when absent the API still starts, with generation degraded
    /// to a "Service unavailable" response.
    pub openai_api_key: Option<String>,
    /// Whether POST /api/email/generate demands a valid bearer token.
    pub generate_requires_auth: bool,
    /// Browser origin allowed by CORS (the Angular dev server by default).
    pub cors_origin: String,
    pub environment: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            auth0_domain: require_env("AUTH0_DOMAIN")?,
            auth0_audience: require_env("AUTH0_AUDIENCE")?,
            auth0_public_key: require_env("AUTH0_PUBLIC_KEY")?,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            generate_requires_auth: std::env::var("GENERATE_REQUIRES_AUTH")
                .map(|v| v.trim().parse::<bool>().unwrap_or(true))
                .unwrap_or(true),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Issuer URL expected in tokens, derived from the tenant domain.
    /// Auth0 issuers always carry a trailing slash.
    pub fn auth0_issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
