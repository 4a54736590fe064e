//! PostgreSQL implementations of the store traits.

pub mod admin;
pub mod recruit;

pub use admin::AdminRepository;
pub use recruit::RecruitRepository;
