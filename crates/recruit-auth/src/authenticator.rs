//! Email and password login for reviewers.

use std::sync::Arc;

use tracing::{info, warn};

use recruit_core::config::AuthConfig;
use recruit_core::error::AppError;
use recruit_core::result::AppResult;
use recruit_database::CredentialStore;
use recruit_entity::admin::Admin;

use crate::jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Verifies admin credentials and issues bearer tokens.
#[derive(Debug, Clone)]
pub struct Authenticator {
    admins: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl Authenticator {
    /// Creates a new authenticator. Fails on an unusable token TTL.
    pub fn new(admins: Arc<dyn CredentialStore>, config: &AuthConfig) -> AppResult<Self> {
        Ok(Self {
            admins,
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config),
        })
    }

    /// Checks the credentials and issues a token.
    ///
    /// Unknown email and wrong password fail with the same message.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let Some(admin) = self.admins.find_by_email(email).await? else {
            warn!(email = %email, "Login attempt for unknown admin");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &admin.password_hash)? {
            warn!(admin_id = %admin.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.encoder.issue(admin.id, &admin.email)?;
        info!(admin_id = %admin.id, expires_at = %token.expires_at, "Admin logged in");
        Ok(token)
    }

    /// Validates a bearer token.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        self.decoder.decode(token)
    }

    /// Creates the admin if no account with this email exists yet.
    ///
    /// Returns the existing or newly created account; an existing
    /// account's password is left untouched.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> AppResult<Admin> {
        if let Some(existing) = self.admins.find_by_email(email).await? {
            return Ok(existing);
        }
        let hash = self.hasher.hash_password(password)?;
        let admin = self.admins.insert(email, &hash).await?;
        info!(admin_id = %admin.id, email = %admin.email, "Bootstrap admin created");
        Ok(admin)
    }
}
