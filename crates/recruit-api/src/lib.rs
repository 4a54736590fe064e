//! # recruit-api
//!
//! HTTP API layer for Recruit Intake built on Axum.
//!
//! Provides the recruit and login endpoints, the bearer-token extractor,
//! request logging and CORS middleware, and the mapping from `AppError`
//! to JSON error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, run_server, shutdown_signal};
pub use error::{ApiError, ApiErrorResponse};
pub use router::build_router;
pub use state::AppState;
