//! Reviewer accounts allowed to log into the dashboard.

pub mod model;

pub use model::Admin;
