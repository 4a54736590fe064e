//! Request and response bodies that are not entity types.

pub mod request;
pub mod response;

pub use request::LoginRequest;
pub use response::{HealthResponse, LoginResponse};
