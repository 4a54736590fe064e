//! # recruit-database
//!
//! Record and credential stores for Recruit Intake. The service layer only
//! sees the [`RecruitStore`] and [`CredentialStore`] traits; the concrete
//! backend (PostgreSQL or in-memory) is chosen from configuration by
//! [`Stores::connect`].

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use error::{StoreError, StoreResult};
pub use store::{
    ADMIN_EMAIL_CONSTRAINT, CredentialStore, RecruitStore, STUDENT_ID_CONSTRAINT, Stores,
};
