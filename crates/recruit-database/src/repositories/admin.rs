//! Admin credential repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use recruit_entity::admin::Admin;

use crate::error::StoreResult;
use crate::store::CredentialStore;

/// Repository for the `admins` table.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for AdminRepository {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Admin>> {
        let admin =
            sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(admin)
    }

    async fn insert(&self, email: &str, password_hash: &str) -> StoreResult<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, email, password_hash) VALUES ($1, LOWER($2), $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(admin)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> StoreResult<bool> {
        let result = sqlx::query("UPDATE admins SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> StoreResult<Vec<Admin>> {
        let admins = sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(admins)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
