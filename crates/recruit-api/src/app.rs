//! Application builder: wires stores, mail, services and auth into
//! `AppState`, then serves the router.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use recruit_auth::Authenticator;
use recruit_core::config::AppConfig;
use recruit_core::error::{AppError, ErrorKind};
use recruit_core::result::AppResult;
use recruit_database::Stores;
use recruit_database::migration::run_migrations;
use recruit_mail::build_mailer;
use recruit_service::{ConfirmationNotifier, RecruitService};

use crate::router::build_router;
use crate::state::AppState;

const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Build the shared state for the configured backends.
///
/// Runs migrations when the store is PostgreSQL and ensures the bootstrap
/// admin when one is configured.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    // ── Step 1: Record and credential stores ─────────────────────
    let stores = Stores::connect(&config.database).await?;
    if let Some(pool) = stores.pool() {
        run_migrations(pool.pool()).await?;
    }

    // ── Step 2: Mail transport ───────────────────────────────────
    let mailer = build_mailer(&config.mail)?;
    let notifier = Arc::new(ConfirmationNotifier::new(mailer));

    // ── Step 3: Services ─────────────────────────────────────────
    let recruit_service = Arc::new(RecruitService::new(
        Arc::clone(&stores.recruits),
        notifier,
    ));
    let authenticator = Arc::new(Authenticator::new(
        Arc::clone(&stores.admins),
        &config.auth,
    )?);

    // ── Step 4: Bootstrap admin ──────────────────────────────────
    if config.auth.jwt_secret == DEFAULT_JWT_SECRET {
        warn!("auth.jwt_secret is the default value; set RECRUIT__AUTH__JWT_SECRET");
    }
    if let Some((email, password)) = config.auth.bootstrap_admin() {
        authenticator.ensure_admin(email, password).await?;
    }

    Ok(AppState::new(Arc::new(config), recruit_service, authenticator))
}

/// Build the state, bind the listener and serve until a shutdown signal.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Recruit Intake v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = build_state(config).await?;
    let recruit_service = Arc::clone(&state.recruit_service);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(address = %addr, "Recruit Intake listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    recruit_service.drain_notifications(grace).await;
    info!("Recruit Intake shut down");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
