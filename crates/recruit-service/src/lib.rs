//! # recruit-service
//!
//! Business logic service layer for Recruit Intake. Services receive their
//! dependencies as `Arc` references at construction time.

pub mod admin;
pub mod notification;
pub mod recruit;

pub use admin::AdminService;
pub use notification::ConfirmationNotifier;
pub use recruit::RecruitService;
