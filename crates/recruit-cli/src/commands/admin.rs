//! Reviewer account management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use recruit_core::config::AppConfig;
use recruit_core::result::AppResult;
use recruit_database::Stores;
use recruit_entity::admin::Admin;
use recruit_service::AdminService;

use super::input_error;
use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a reviewer account
    Create {
        /// Login email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Reset a reviewer's password
    ResetPassword {
        /// Login email
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List reviewer accounts
    List,
    /// Delete a reviewer account
    Delete {
        /// Login email
        #[arg(short, long)]
        email: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct AdminRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Admin> for AdminRow {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            email: admin.email.clone(),
            created_at: admin.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    if config.database.provider == "memory" {
        output::print_warning("The memory provider forgets accounts when this command exits.");
    }
    let stores = Stores::connect(&config.database).await?;
    let service = AdminService::new(stores.admins);

    match &args.command {
        AdminCommand::Create { email, password } => {
            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin email")
                    .interact_text()
                    .map_err(input_error)?,
            };
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Admin password")?,
            };

            let admin = service.create(&email, &password).await?;
            output::print_success(&format!("Admin '{}' created (id: {})", admin.email, admin.id));
        }
        AdminCommand::ResetPassword { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("New password")?,
            };

            let admin = service.reset_password(email, &password).await?;
            output::print_success(&format!("Password reset for '{}'", admin.email));
        }
        AdminCommand::List => {
            let admins = service.list().await?;
            let rows: Vec<AdminRow> = admins.iter().map(AdminRow::from).collect();
            output::print_list(&rows, format);
        }
        AdminCommand::Delete { email, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete admin '{email}'?"))
                    .default(false)
                    .interact()
                    .map_err(input_error)?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let admin = service.delete(email).await?;
            output::print_success(&format!("Admin '{}' deleted", admin.email));
        }
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> AppResult<String> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(input_error)
}
