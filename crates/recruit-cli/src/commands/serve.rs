//! Start the API server.

use clap::Args;

use recruit_core::config::AppConfig;
use recruit_core::result::AppResult;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> AppResult<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }

    println!("Starting Recruit Intake server...");
    println!("  Address:  {}", config.server.bind_address());
    println!("  Database: {}", config.database.provider);

    recruit_api::run_server(config).await
}
