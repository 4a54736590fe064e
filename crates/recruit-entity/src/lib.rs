//! # recruit-entity
//!
//! Domain entity models for Recruit Intake. Database rows derive
//! `sqlx::FromRow`; input types derive `validator::Validate` so the same
//! schema is enforced by the public form and by the API.

pub mod admin;
pub mod recruit;
pub mod validation;

pub use admin::Admin;
pub use recruit::{Department, NewRecruit, Recruit, RecruitPatch};
pub use validation::{FieldErrors, field_messages};
