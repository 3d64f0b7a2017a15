//! BitUp bootcamp registration CLI - main entry point.

mod commands;
mod config;
mod error;

use crate::config::Config;
use crate::error::AppResult;
use anyhow::Context;
use registry_client::RegistryClient;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.cli.log_level);

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    let client = RegistryClient::new(&config.registry.base_url, config.registry.timeout)
        .context("Failed to create registry client")?;
    debug!("Registry endpoint: {}", config.registry.base_url);

    match command.as_str() {
        "register" => commands::register::run(client, &config, &args[2..]).await,
        "participants" => commands::participants::run(&client).await,
        "workshops" => {
            println!("{}", commands::workshops::showcase());
            Ok(())
        }
        other => {
            info!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!(
        r#"BitUp bootcamp registration

usage:
  bitup register <full-name> <discord-user> <email> <motivation> <bootcamp>...
  bitup participants
  bitup workshops"#
    );
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
