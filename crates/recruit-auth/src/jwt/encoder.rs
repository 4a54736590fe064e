//! JWT token creation.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use recruit_core::config::AuthConfig;
use recruit_core::error::AppError;

use super::claims::Claims;

/// Creates signed access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl: TimeDelta,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl.num_minutes())
            .finish()
    }
}

/// A freshly issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The signed JWT.
    pub access_token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails when `token_ttl_minutes` would push expiry past the range of
    /// a timestamp.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.token_ttl_minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_minutes is out of range: {}",
                    config.token_ttl_minutes
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for the given admin.
    pub fn issue(&self, admin_id: Uuid, email: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;

        let claims = Claims {
            sub: admin_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            expires_at: exp,
        })
    }
}
