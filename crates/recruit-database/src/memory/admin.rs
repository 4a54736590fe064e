//! In-memory credential store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use recruit_entity::admin::Admin;

use crate::error::{StoreError, StoreResult};
use crate::store::{ADMIN_EMAIL_CONSTRAINT, CredentialStore};

/// Credential store backed by a vector, in creation order.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    admins: RwLock<Vec<Admin>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Admin>> {
        let admins = self.admins.read().await;
        Ok(admins
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn insert(&self, email: &str, password_hash: &str) -> StoreResult<Admin> {
        let mut admins = self.admins.write().await;
        if admins.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            return Err(StoreError::UniqueViolation {
                constraint: ADMIN_EMAIL_CONSTRAINT.to_string(),
                message: format!("admin with email {email} already exists"),
            });
        }
        let admin = Admin {
            id: Uuid::new_v4(),
            email: email.to_lowercase(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        admins.push(admin.clone());
        Ok(admin)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> StoreResult<bool> {
        let mut admins = self.admins.write().await;
        match admins.iter_mut().find(|a| a.id == id) {
            Some(admin) => {
                admin.password_hash = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_all(&self) -> StoreResult<Vec<Admin>> {
        Ok(self.admins.read().await.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut admins = self.admins.write().await;
        let before = admins.len();
        admins.retain(|a| a.id != id);
        Ok(admins.len() != before)
    }
}
