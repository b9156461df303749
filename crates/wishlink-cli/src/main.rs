//! Wishlink CLI - gift wishlists you can share and reserve
//!
//! A command-line client for the Wishlink service: build your wishlist,
//! share it as a link, and reserve gifts on a friend's list so nobody gives
//! the same present twice.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wishlink_core::{ApiClient, AppConfig, SessionStore};

#[derive(Parser)]
#[command(name = "wishlink")]
#[command(author, version, about = "Gift wishlist CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override the API base URL (or set WISHLINK_API_URL env var)
    #[arg(long, env = "WISHLINK_API_URL", global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, register, log out
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },

    /// Manage gifts on my wishlist
    Gift {
        #[command(subcommand)]
        action: commands::gift::GiftAction,
    },

    /// View and reserve on shared wishlists
    Shared {
        #[command(subcommand)]
        action: commands::shared::SharedAction,
    },

    /// Gifts I reserved on other people's wishlists
    Reserved {
        #[command(subcommand)]
        action: commands::reserved::ReservedAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    log::debug!("Using API base URL {}", config.api_base_url);

    // Create context for commands
    let ctx = commands::Context {
        client: ApiClient::from_config(&config)?,
        store: SessionStore::new()?,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    let result = match cli.command {
        Commands::Auth { action } => commands::auth::execute(&ctx, action).await,
        Commands::Gift { action } => commands::gift::execute(&ctx, action).await,
        Commands::Shared { action } => commands::shared::execute(&ctx, action).await,
        Commands::Reserved { action } => commands::reserved::execute(&ctx, action).await,
        Commands::Config { action } => commands::config::execute(&ctx, action).await,
    };

    if let Err(err) = result {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
    Ok(())
}
