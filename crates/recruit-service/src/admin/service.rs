//! Admin account management used by the command-line tool.

use std::sync::Arc;

use tracing::info;
use validator::ValidateEmail;

use recruit_auth::PasswordHasher;
use recruit_core::error::AppError;
use recruit_core::result::AppResult;
use recruit_database::{ADMIN_EMAIL_CONSTRAINT, CredentialStore};
use recruit_entity::admin::Admin;

/// Minimum accepted password length for admin accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Creates, lists, resets and deletes reviewer accounts.
#[derive(Debug, Clone)]
pub struct AdminService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
        }
    }

    /// Create an admin account.
    pub async fn create(&self, email: &str, password: &str) -> AppResult<Admin> {
        let email = email.trim();
        if !email.validate_email() {
            return Err(AppError::validation("Invalid email address"));
        }
        check_password(password)?;

        let hash = self.hasher.hash_password(password)?;
        let admin = self.store.insert(email, &hash).await.map_err(|e| {
            if e.violates(ADMIN_EMAIL_CONSTRAINT) {
                AppError::conflict(format!("An admin with email {email} already exists"))
            } else {
                AppError::from(e)
            }
        })?;

        info!(admin_id = %admin.id, email = %admin.email, "Admin created");
        Ok(admin)
    }

    /// Replace an admin's password.
    pub async fn reset_password(&self, email: &str, password: &str) -> AppResult<Admin> {
        check_password(password)?;
        let admin = self.find(email).await?;
        let hash = self.hasher.hash_password(password)?;
        self.store.update_password(admin.id, &hash).await?;
        info!(admin_id = %admin.id, "Admin password reset");
        Ok(admin)
    }

    /// Every admin account.
    pub async fn list(&self) -> AppResult<Vec<Admin>> {
        Ok(self.store.find_all().await?)
    }

    /// Delete an admin account by email.
    pub async fn delete(&self, email: &str) -> AppResult<Admin> {
        let admin = self.find(email).await?;
        self.store.delete(admin.id).await?;
        info!(admin_id = %admin.id, "Admin deleted");
        Ok(admin)
    }

    async fn find(&self, email: &str) -> AppResult<Admin> {
        self.store
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Admin {email} not found")))
    }
}

fn check_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
