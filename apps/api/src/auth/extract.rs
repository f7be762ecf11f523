//! Axum extractors that turn a bearer token into an authenticated caller.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

/// The verified caller. Any handler taking this parameter rejects requests
/// with a missing or invalid token as 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The token's `sub` claim, used as the preference document key.
    pub user_id: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;

        let claims = state.jwt.validate(token).map_err(|e| {
            debug!("Rejected bearer token: {e}");
            AppError::Unauthorized
        })?;

        debug!(
            "Authenticated {} ({})",
            claims.sub,
            claims.email.as_deref().unwrap_or("no email claim")
        );

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

/// Best-effort variant for routes whose auth requirement is policy-driven:
/// extraction never fails, an absent or invalid token just yields `None`.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = extract_bearer_token(&parts.headers).and_then(|token| {
            match state.jwt.validate(token) {
                Ok(claims) => Some(AuthUser {
                    user_id: claims.sub,
                }),
                Err(e) => {
                    debug!("Ignoring invalid bearer token: {e}");
                    None
                }
            }
        });

        Ok(MaybeAuthUser(user))
    }
}

/// Pulls the raw token out of an `Authorization: Bearer <token>` header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
