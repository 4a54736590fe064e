//! Database migration commands.

use clap::{Args, Subcommand};

use recruit_core::config::AppConfig;
use recruit_core::result::AppResult;
use recruit_database::DatabasePool;
use recruit_database::migration::run_migrations;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> AppResult<()> {
    match &args.command {
        MigrateCommand::Run => {
            if config.database.provider != "postgres" {
                output::print_warning(&format!(
                    "Provider '{}' keeps no schema; nothing to migrate.",
                    config.database.provider
                ));
                return Ok(());
            }

            println!("Running database migrations...");
            let pool = DatabasePool::connect(&config.database).await?;
            run_migrations(pool.pool()).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }
    Ok(())
}
