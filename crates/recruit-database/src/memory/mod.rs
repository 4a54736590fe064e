//! In-memory store implementations, selected with `database.provider = "memory"`.
//!
//! They enforce the same uniqueness constraints as the SQL schema and
//! report violations under the same constraint names.

pub mod admin;
pub mod recruit;

pub use admin::MemoryCredentialStore;
pub use recruit::MemoryRecruitStore;
