//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A reviewer account. Any admin may read and modify every recruit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique admin identifier.
    pub id: Uuid,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
