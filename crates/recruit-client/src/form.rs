//! The public application form.

use tracing::{info, warn};
use validator::Validate;

use recruit_entity::recruit::NewRecruit;
use recruit_entity::validation::{FieldErrors, field_messages};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::notice::Notice;
use crate::route::Route;

const FAILED_TITLE: &str = "Application Failed";
const HTTP_FALLBACK: &str = "Something went wrong while submitting your application";
const NETWORK_FALLBACK: &str =
    "We couldn't submit your application. Please check your connection and try again.";

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Accepting input.
    Editing,
    /// A submission is in flight.
    Submitting,
}

/// What happened on submit.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Input failed the schema; nothing was sent.
    Invalid(FieldErrors),
    /// The server stored the application; navigate to the route.
    Submitted(Route),
    /// The server or the network refused; show the notice.
    Failed(Notice),
}

/// Holds the applicant's input and submits it.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    client: ApiClient,
    state: FormState,
    /// Current field values. `current_semester` starts prefilled.
    pub data: NewRecruit,
}

impl ApplicationForm {
    /// An empty form posting to `client`.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: FormState::Editing,
            data: NewRecruit::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validate the input and post it.
    ///
    /// Invalid input never leaves the form. After any outcome the form is
    /// back in `Editing`; a successful submit also clears the fields.
    pub async fn submit(&mut self) -> FormOutcome {
        if let Err(errors) = self.data.validate() {
            return FormOutcome::Invalid(field_messages(&errors));
        }

        self.state = FormState::Submitting;
        let payload = self.data.clone().normalized();
        let result = self.client.submit(&payload).await;
        self.state = FormState::Editing;

        match result {
            Ok(recruit) => {
                info!(recruit_id = recruit.id, "Application submitted");
                self.data = NewRecruit::default();
                FormOutcome::Submitted(Route::Success)
            }
            Err(err) => {
                warn!(error = %err, "Application submit failed");
                FormOutcome::Failed(Notice::error(FAILED_TITLE, failure_description(&err)))
            }
        }
    }
}

fn failure_description(err: &ClientError) -> String {
    match err {
        ClientError::Http { message: Some(message), .. } => message.clone(),
        ClientError::Http { message: None, .. } => HTTP_FALLBACK.to_string(),
        ClientError::Network(_) | ClientError::Storage(_) => NETWORK_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_input_is_not_sent() {
        // Nothing listens on port 9; an attempted request would be a network failure.
        let mut form = ApplicationForm::new(ApiClient::new("http://127.0.0.1:9"));
        form.data.first_name = "Ada".into();

        match form.submit().await {
            FormOutcome::Invalid(fields) => {
                assert!(fields.contains_key("studentId"));
                assert!(!fields.contains_key("firstName"));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.data.first_name, "Ada");
    }

    #[test]
    fn failure_descriptions_fall_back_by_cause() {
        let with_message = ClientError::Http {
            status: 409,
            message: Some("already submitted".into()),
        };
        assert_eq!(failure_description(&with_message), "already submitted");

        let bare = ClientError::Http {
            status: 502,
            message: None,
        };
        assert_eq!(failure_description(&bare), HTTP_FALLBACK);

        let offline = ClientError::Network("connection refused".into());
        assert_eq!(failure_description(&offline), NETWORK_FALLBACK);
    }
}
