//! Verification of Auth0-issued bearer tokens.
//!
//! The API never mints tokens. The Angular client obtains an RS256 access
//! token from the Auth0 tenant and sends it as `Authorization: Bearer <jwt>`;
//! this module checks the signature against the tenant's public key and the
//! registered claims (exp, iss, aud) before any handler trusts the caller.

pub mod extract;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid RSA public key: {0}")]
    InvalidKey(jsonwebtoken::errors::Error),

    #[error("Token expired")]
    TokenExpired,

    #[error("JWT validation failed: {0}")]
    JwtDecode(jsonwebtoken::errors::Error),

    #[error("Invalid claim '{claim}': {message}")]
    InvalidClaim {
        claim: &'static str,
        message: &'static str,
    },
}

/// Claims this service reads from an access token. Anything else the tenant
/// includes is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the opaque external user id every preference document is
    /// keyed by. Never parsed, only compared.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    /// Present only when the tenant adds an email claim; used for logging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Claims {
    /// Claim checks beyond what signature validation covers.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub",
                message: "sub cannot be empty",
            });
        }
        Ok(())
    }
}

/// JWT validator pinned to one tenant's key, issuer and audience.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create a validator for RS256 tokens (the Auth0 production path).
    pub fn with_rs256(
        public_key_pem: &str,
        issuer: &str,
        audience: &str,
    ) -> Result<Self, AuthError> {
        let decoding_key =
            DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(AuthError::InvalidKey)?;

        Ok(Self {
            decoding_key,
            validation: build_validation(Algorithm::RS256, issuer, audience),
        })
    }

    /// Create a validator for HS256 tokens (symmetric secret). Test-friendly:
    /// lets a suite mint its own tokens without an RSA key pair.
    pub fn with_hs256(secret: &[u8], issuer: &str, audience: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: build_validation(Algorithm::HS256, issuer, audience),
        }
    }

    /// Validate a token and return its claims.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::JwtDecode(e),
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}

fn build_validation(algorithm: Algorithm, issuer: &str, audience: &str) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.validate_exp = true;
    validation.leeway = 30; // 30 second clock skew tolerance
    validation.set_issuer(&[issuer]);
    validation.set_audience(&[audience]);
    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
    const ISSUER: &str = "https://test-tenant.auth0.com/";
    const AUDIENCE: &str = "https://aica-api.test";

    fn test_validator() -> JwtValidator {
        JwtValidator::with_hs256(SECRET, ISSUER, AUDIENCE)
    }

    fn mint_token(claims: &serde_json::Value, secret: &[u8]) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn valid_claims() -> serde_json::Value {
        serde_json::json!({
            "sub": "auth0|user-123",
            "exp": chrono::Utc::now().timestamp() + 3600,
            "iat": chrono::Utc::now().timestamp(),
            "iss": ISSUER,
            "aud": AUDIENCE,
        })
    }

    #[test]
    fn test_valid_token_returns_claims() {
        let token = mint_token(&valid_claims(), SECRET);

        let claims = test_validator().validate(&token).unwrap();
        assert_eq!(claims.sub, "auth0|user-123");
        assert_eq!(claims.email, None);
    }

    #[test]
    fn test_email_claim_is_carried_when_present() {
        let mut claims = valid_claims();
        claims["email"] = serde_json::json!("user@example.com");
        let token = mint_token(&claims, SECRET);

        let validated = test_validator().validate(&token).unwrap();
        assert_eq!(validated.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut claims = valid_claims();
        claims["exp"] = serde_json::json!(chrono::Utc::now().timestamp() - 3600);
        let token = mint_token(&claims, SECRET);

        let result = test_validator().validate(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = mint_token(&valid_claims(), b"some-other-secret-32-bytes-long!!");

        let result = test_validator().validate(&token);
        assert!(matches!(result, Err(AuthError::JwtDecode(_))));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let mut claims = valid_claims();
        claims["aud"] = serde_json::json!("https://someone-elses-api.test");
        let token = mint_token(&claims, SECRET);

        let result = test_validator().validate(&token);
        assert!(matches!(result, Err(AuthError::JwtDecode(_))));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let mut claims = valid_claims();
        claims["iss"] = serde_json::json!("https://rogue-tenant.auth0.com/");
        let token = mint_token(&claims, SECRET);

        let result = test_validator().validate(&token);
        assert!(matches!(result, Err(AuthError::JwtDecode(_))));
    }

    #[test]
    fn test_empty_sub_rejected() {
        let mut claims = valid_claims();
        claims["sub"] = serde_json::json!("");
        let token = mint_token(&claims, SECRET);

        let result = test_validator().validate(&token);
        assert!(matches!(result, Err(AuthError::InvalidClaim { claim: "sub", .. })));
    }
}
