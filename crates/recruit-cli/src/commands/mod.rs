//! CLI command definitions and dispatch.

pub mod admin;
pub mod apply;
pub mod dashboard;
pub mod login;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use recruit_client::{ApiClient, ClientError, FileTokenStore, Notice};
use recruit_core::config::AppConfig;
use recruit_core::error::AppError;
use recruit_core::result::AppResult;

use crate::output::OutputFormat;

/// Recruit Intake: club recruitment applications and reviewer dashboard
#[derive(Debug, Parser)]
#[command(name = "recruit", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment; loads `config/{env}.toml` over the defaults
    #[arg(short, long, env = "RECRUIT_ENV", default_value = "development")]
    pub env: String,

    /// Directory holding the configuration files
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Override the API base URL used by client commands
    #[arg(long)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Reviewer account management
    Admin(admin::AdminArgs),
    /// Fill in and submit an application
    Apply,
    /// Log in as a reviewer and keep the token
    Login(login::LoginArgs),
    /// Forget the stored token
    Logout,
    /// Reviewer dashboard
    Dashboard(dashboard::DashboardArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> AppResult<()> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Admin(args) => admin::execute(args, &config, self.format).await,
            Commands::Apply => apply::execute(&config).await,
            Commands::Login(args) => login::execute(args, &config).await,
            Commands::Logout => login::logout(&config).await,
            Commands::Dashboard(args) => dashboard::execute(args, &config, self.format).await,
        }
    }

    fn load_config(&self) -> AppResult<AppConfig> {
        let mut config = AppConfig::load_from(&self.config_dir, &self.env)?;
        if let Some(url) = &self.api_url {
            config.client.api_url = url.clone();
        }
        Ok(config)
    }
}

/// Helper: API client for the configured base URL
pub fn api_client(config: &AppConfig) -> ApiClient {
    ApiClient::new(&config.client.api_url)
}

/// Helper: token file from the configured path
pub fn token_store(config: &AppConfig) -> FileTokenStore {
    FileTokenStore::new(&config.client.token_path)
}

/// Helper: map a prompt failure
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

/// Helper: map a client failure
pub fn client_error(e: ClientError) -> AppError {
    if e.is_unauthorized() {
        AppError::unauthorized(e.to_string())
    } else {
        AppError::external_service(e.to_string())
    }
}

/// Helper: turn a failure notice into an error
pub fn notice_error(notice: Notice) -> AppError {
    AppError::external_service(format!("{}: {}", notice.title, notice.description))
}
