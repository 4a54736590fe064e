//! Reviewer login.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use recruit_entity::validation::{FieldErrors, field_messages};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::notice::Notice;
use crate::route::Route;
use crate::token::TokenStore;

/// Login form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginCredentials {
    /// Admin email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// What happened on login.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Input failed the form rules; nothing was sent.
    Invalid(FieldErrors),
    /// Token stored; navigate to the route.
    LoggedIn {
        /// Where to go next.
        route: Route,
        /// Welcome notice.
        notice: Notice,
    },
    /// Login refused or the token could not be saved.
    Failed(Notice),
}

/// Validate, call the login endpoint, and persist the token.
pub async fn login(
    client: &ApiClient,
    tokens: &dyn TokenStore,
    credentials: &LoginCredentials,
) -> LoginOutcome {
    if let Err(errors) = credentials.validate() {
        return LoginOutcome::Invalid(field_messages(&errors));
    }

    let issued = match client.login(&credentials.email, &credentials.password).await {
        Ok(issued) => issued,
        Err(err) => {
            warn!(error = %err, "Login failed");
            return LoginOutcome::Failed(Notice::error("Login Failed", failure_description(&err)));
        }
    };

    if let Err(err) = tokens.save(&issued.access_token).await {
        return LoginOutcome::Failed(Notice::error("Login Failed", err.to_string()));
    }

    info!(expires_at = %issued.expires_at, "Logged in");
    LoginOutcome::LoggedIn {
        route: Route::Dashboard,
        notice: Notice::success("Login Successful", "Welcome back!"),
    }
}

fn failure_description(err: &ClientError) -> String {
    match err {
        ClientError::Http { message, .. } => message
            .clone()
            .unwrap_or_else(|| "Invalid credentials".to_string()),
        ClientError::Network(_) | ClientError::Storage(_) => {
            "Login failed. Please try again.".to_string()
        }
    }
}
