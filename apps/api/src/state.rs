use std::sync::Arc;

use crate::auth::JwtValidator;
use crate::config::Config;
use crate::generation::service::EmailGenerator;
use crate::preferences::service::PreferencesService;

/// Shared application state injected into all route handlers via Axum
/// extractors. Every service is constructed once in `main` and cloned per
/// request — no module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Token verifier for the Auth0 tenant; also used by the optional-auth
    /// extractor on the generate route.
    pub jwt: Arc<JwtValidator>,
    pub preferences: PreferencesService,
    pub generator: EmailGenerator,
}
