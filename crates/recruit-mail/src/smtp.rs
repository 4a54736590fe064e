//! SMTP delivery through lettre's tokio transport.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use recruit_core::config::MailConfig;
use recruit_core::error::{AppError, ErrorKind};
use recruit_core::result::AppResult;

use crate::mailer::{Mailer, OutgoingMail};

/// Sends mail through a configured SMTP relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from.to_string())
            .finish()
    }
}

impl SmtpMailer {
    /// Build the transport. `secure` selects implicit TLS, otherwise
    /// STARTTLS is used.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let from: Mailbox = config.from.parse().map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid sender address '{}'", config.from),
                e,
            )
        })?;

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid SMTP host '{}'", config.host),
                e,
            )
        })?
        .port(config.port);

        let builder = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => {
                builder.credentials(Credentials::new(user.clone(), pass.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        let to: Mailbox = mail.to.parse().map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Invalid recipient address '{}'", mail.to),
                e,
            )
        })?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject)
            .multipart(MultiPart::alternative_plain_html(mail.text, mail.html))
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Failed to build message", e)
            })?;

        let response = self.transport.send(message).await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, format!("SMTP send failed: {e}"), e)
        })?;

        debug!(to = %mail.to, code = %response.code(), "Mail accepted by relay");
        Ok(())
    }
}
