//! The mail transport seam and its configuration dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use recruit_core::config::MailConfig;
use recruit_core::result::AppResult;

use crate::noop::NoopMailer;
use crate::smtp::SmtpMailer;

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text: String,
    /// HTML body.
    pub html: String,
}

/// Delivers one message in a single attempt.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Send the message.
    async fn send(&self, mail: OutgoingMail) -> AppResult<()>;
}

/// Build the transport selected by `mail.enabled`.
pub fn build_mailer(config: &MailConfig) -> AppResult<Arc<dyn Mailer>> {
    if config.enabled {
        info!(host = %config.host, port = config.port, secure = config.secure, "Initializing SMTP mailer");
        Ok(Arc::new(SmtpMailer::new(config)?))
    } else {
        info!("Mail disabled; confirmation emails will be dropped");
        Ok(Arc::new(NoopMailer))
    }
}
