//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use recruit_core::config::AuthConfig;
use recruit_core::error::AppError;

use super::claims::Claims;

/// Validates access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token, checking signature and expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            }
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use super::*;
    use crate::jwt::JwtEncoder;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn issued_token_round_trips_claims() {
        let cfg = config("secret");
        let id = Uuid::new_v4();
        let issued = JwtEncoder::new(&cfg).unwrap().issue(id, "r@example.com").unwrap();
        let claims = JwtDecoder::new(&cfg).decode(&issued.access_token).unwrap();
        assert_eq!(claims.admin_id(), id);
        assert_eq!(claims.email, "r@example.com");
        assert_eq!(claims.expires_at().timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn default_ttl_is_one_day() {
        let cfg = config("secret");
        let issued = JwtEncoder::new(&cfg).unwrap().issue(Uuid::new_v4(), "r@example.com").unwrap();
        let remaining = issued.expires_at - Utc::now();
        assert!(remaining > chrono::Duration::minutes(1439));
        assert!(remaining <= chrono::Duration::minutes(1440));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issued = JwtEncoder::new(&config("one"))
            .unwrap()
            .issue(Uuid::new_v4(), "r@example.com")
            .unwrap();
        let err = JwtDecoder::new(&config("two"))
            .decode(&issued.access_token)
            .unwrap_err();
        assert_eq!(err.kind, recruit_core::ErrorKind::Unauthorized);
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "r@example.com".into(),
            iat: now - 7200,
            exp: now - 3600,
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        let err = JwtDecoder::new(&config("secret")).decode(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn garbage_is_rejected() {
        let err = JwtDecoder::new(&config("secret")).decode("not.a.jwt").unwrap_err();
        assert_eq!(err.kind, recruit_core::ErrorKind::Unauthorized);
    }
}
