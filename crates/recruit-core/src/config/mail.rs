//! Outgoing mail configuration.

use serde::{Deserialize, Serialize};

/// SMTP transport configuration for confirmation emails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Whether confirmation emails are sent at all.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host.
    #[serde(default)]
    pub host: String,
    /// SMTP port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Use implicit TLS (`true`) or STARTTLS (`false`).
    #[serde(default)]
    pub secure: bool,
    /// SMTP username.
    #[serde(default)]
    pub username: Option<String>,
    /// SMTP password.
    #[serde(default)]
    pub password: Option<String>,
    /// Sender address used in the `From` header.
    #[serde(default = "default_from")]
    pub from: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: String::new(),
            port: default_port(),
            secure: false,
            username: None,
            password: None,
            from: default_from(),
        }
    }
}

fn default_port() -> u16 {
    587
}

fn default_from() -> String {
    "noreply@example.com".to_string()
}
