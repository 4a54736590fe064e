//! Recruit record lifecycle.

pub mod service;

pub use service::RecruitService;
