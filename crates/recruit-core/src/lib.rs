//! # recruit-core
//!
//! Core crate for Recruit Intake. Contains the configuration schemas and
//! the unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other Recruit crates.

pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
