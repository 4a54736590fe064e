//! JSON body extractor that runs `validator` rules after deserializing.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use recruit_core::error::AppError;
use recruit_entity::validation::field_messages;

use crate::error::ApiError;

/// A deserialized and validated JSON body.
///
/// Malformed JSON becomes a 400 `BAD_REQUEST`; rule violations become a
/// 400 `VALIDATION_ERROR` with per-field messages in `details`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        value.validate().map_err(|e| validation_error(&e))?;
        Ok(Self(value))
    }
}

/// Collapse `validator` output into an `AppError` whose message joins
/// every rule message and whose `details` maps wire field names to them.
pub fn validation_error(errors: &ValidationErrors) -> AppError {
    let fields = field_messages(errors);
    let message = fields
        .values()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");
    let details = serde_json::to_value(&fields).unwrap_or_default();
    AppError::validation(message).with_details(details)
}

#[cfg(test)]
mod tests {
    use recruit_entity::recruit::NewRecruit;

    use super::*;

    #[test]
    fn empty_submission_becomes_validation_error_with_details() {
        let errors = NewRecruit::default().validate().unwrap_err();
        let err = validation_error(&errors);
        assert_eq!(err.kind, recruit_core::ErrorKind::Validation);
        let details = err.details.unwrap();
        assert_eq!(details["phoneNumber"][0], "Phone number must be at least 10 digits");
        assert!(err.message.contains("Student ID is required"));
    }
}
