//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use recruit_auth::Authenticator;
use recruit_core::config::AppConfig;
use recruit_service::RecruitService;

/// Shared dependencies, passed to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Recruit record service.
    pub recruit_service: Arc<RecruitService>,
    /// Login and token verification.
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    /// Bundle the shared dependencies.
    pub fn new(
        config: Arc<AppConfig>,
        recruit_service: Arc<RecruitService>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            config,
            recruit_service,
            authenticator,
        }
    }
}
