//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::AuthAdmin;
pub use json::{ValidatedJson, validation_error};
pub use path::RecruitId;
