//! # recruit-mail
//!
//! Mail delivery behind the [`Mailer`] trait. [`build_mailer`] picks the
//! SMTP transport or the no-op transport from configuration, and
//! [`template::confirmation`] renders the message sent to applicants.

pub mod mailer;
pub mod noop;
pub mod smtp;
pub mod template;

pub use mailer::{Mailer, OutgoingMail, build_mailer};
pub use noop::NoopMailer;
pub use smtp::SmtpMailer;
