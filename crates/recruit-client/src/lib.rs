//! # recruit-client
//!
//! Client side of Recruit Intake: a typed HTTP client for the API, the
//! application form state machine, reviewer login, persisted bearer token
//! storage, and the reviewer dashboard controller.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod login;
pub mod notice;
pub mod route;
pub mod token;

pub use api::{ApiClient, TokenResponse};
pub use dashboard::{Dashboard, DashboardOutcome, RecruitDetail, RecruitRow};
pub use error::{ClientError, ClientResult};
pub use form::{ApplicationForm, FormOutcome, FormState};
pub use login::{LoginCredentials, LoginOutcome, login};
pub use notice::{Notice, NoticeLevel};
pub use route::Route;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
