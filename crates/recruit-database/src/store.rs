//! Store traits and the provider dispatch that picks a backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use recruit_core::config::DatabaseConfig;
use recruit_core::error::AppError;
use recruit_core::result::AppResult;
use recruit_entity::admin::Admin;
use recruit_entity::recruit::{NewRecruit, Recruit};

use crate::connection::DatabasePool;
use crate::error::StoreResult;
use crate::memory::{MemoryCredentialStore, MemoryRecruitStore};
use crate::repositories::{AdminRepository, RecruitRepository};

/// Name of the uniqueness constraint on `recruits.student_id`.
pub const STUDENT_ID_CONSTRAINT: &str = "recruits_student_id_key";

/// Name of the uniqueness constraint on `admins.email`.
pub const ADMIN_EMAIL_CONSTRAINT: &str = "admins_email_key";

/// Generic create/read/update/delete access to the `recruits` table.
///
/// Identifiers and both timestamps are assigned by the store.
#[async_trait]
pub trait RecruitStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new record and return it as stored.
    async fn insert(&self, recruit: &NewRecruit) -> StoreResult<Recruit>;

    /// Every record, in storage order.
    async fn find_all(&self) -> StoreResult<Vec<Recruit>>;

    /// Find a record by primary key.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Recruit>>;

    /// Overwrite the non-identity fields of an existing record and refresh
    /// `updated_at`. Returns `None` when the row no longer exists.
    async fn update(&self, recruit: &Recruit) -> StoreResult<Option<Recruit>>;

    /// Delete a record. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Number of stored records.
    async fn count(&self) -> StoreResult<u64>;

    /// Check the store is reachable.
    async fn health_check(&self) -> StoreResult<bool>;
}

/// Lookup and maintenance of reviewer credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an admin by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Admin>>;

    /// Create an admin with an already hashed password.
    async fn insert(&self, email: &str, password_hash: &str) -> StoreResult<Admin>;

    /// Replace an admin's password hash. Returns `true` if the admin exists.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> StoreResult<bool>;

    /// Every admin account.
    async fn find_all(&self) -> StoreResult<Vec<Admin>>;

    /// Delete an admin. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

/// The stores selected by configuration, plus the pool when backed by
/// PostgreSQL.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Recruit records.
    pub recruits: Arc<dyn RecruitStore>,
    /// Admin credentials.
    pub admins: Arc<dyn CredentialStore>,
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Build the stores named by `config.provider`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL record store");
                let pool = DatabasePool::connect(config).await?;
                Ok(Self {
                    recruits: Arc::new(RecruitRepository::new(pool.pool().clone())),
                    admins: Arc::new(AdminRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            "memory" => {
                info!("Initializing in-memory record store");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            recruits: Arc::new(MemoryRecruitStore::new()),
            admins: Arc::new(MemoryCredentialStore::new()),
            pool: None,
        }
    }

    /// The PostgreSQL pool, if this is a database-backed configuration.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_provider_is_selected_by_name() {
        let config = DatabaseConfig {
            provider: "memory".into(),
            ..DatabaseConfig::default()
        };
        let stores = Stores::connect(&config).await.unwrap();
        assert!(stores.pool().is_none());
        assert_eq!(stores.recruits.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_provider_is_a_configuration_error() {
        let config = DatabaseConfig {
            provider: "mongo".into(),
            ..DatabaseConfig::default()
        };
        let err = Stores::connect(&config).await.unwrap_err();
        assert_eq!(err.kind, recruit_core::ErrorKind::Configuration);
    }
}
