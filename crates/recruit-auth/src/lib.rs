//! # recruit-auth
//!
//! Authentication for the reviewer dashboard.
//!
//! - `jwt` issues and verifies HS256 bearer tokens
//! - `password` hashes and verifies Argon2id passwords
//! - `authenticator` turns an email and password into an issued token

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::Authenticator;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
