//! Reviewer login and logout.

use clap::Args;

use recruit_client::{LoginCredentials, LoginOutcome, TokenStore, login};
use recruit_core::config::AppConfig;
use recruit_core::error::AppError;
use recruit_core::result::AppResult;

use super::{api_client, client_error, input_error, notice_error, token_store};
use crate::output;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Admin email (will prompt if not provided)
    #[arg(short, long)]
    pub email: Option<String>,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, config: &AppConfig) -> AppResult<()> {
    let email = match &args.email {
        Some(e) => e.clone(),
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(input_error)?,
    };
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(input_error)?,
    };

    let credentials = LoginCredentials { email, password };
    let tokens = token_store(config);
    match login(&api_client(config), &tokens, &credentials).await {
        LoginOutcome::LoggedIn { notice, .. } => {
            output::print_success(&format!("{}. {}", notice.title, notice.description));
            output::print_kv("Token file", &tokens.path().display().to_string());
            Ok(())
        }
        LoginOutcome::Invalid(fields) => {
            for (field, messages) in &fields {
                output::print_error(&format!("{field}: {}", messages.join("; ")));
            }
            Err(AppError::validation("Login input is invalid"))
        }
        LoginOutcome::Failed(notice) => Err(notice_error(notice)),
    }
}

/// Execute the logout command
pub async fn logout(config: &AppConfig) -> AppResult<()> {
    token_store(config).clear().await.map_err(client_error)?;
    output::print_success("Logged out");
    Ok(())
}
