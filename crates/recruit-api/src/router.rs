//! Route definitions for the Recruit Intake HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(recruit_routes())
        .merge(auth_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Public submission plus token-gated record management.
fn recruit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recruits",
            post(handlers::recruit::create_recruit).get(handlers::recruit::list_recruits),
        )
        .route(
            "/recruits/{id}",
            get(handlers::recruit::get_recruit)
                .patch(handlers::recruit::update_recruit)
                .delete(handlers::recruit::delete_recruit),
        )
}

fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
