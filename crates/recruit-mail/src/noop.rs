//! Transport used when mail is disabled.

use async_trait::async_trait;
use tracing::info;

use recruit_core::result::AppResult;

use crate::mailer::{Mailer, OutgoingMail};

/// Logs and drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        info!(to = %mail.to, subject = %mail.subject, "Mail disabled, message dropped");
        Ok(())
    }
}
