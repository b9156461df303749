//! Config commands
//!
//! Shows and edits the client configuration (API base URL) and reports where
//! the session and config files live.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_error, print_info, print_output, print_success};
use wishlink_core::{config, session, AppConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub async fn execute(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(ctx),
        ConfigAction::Set { key, value } => set_config(ctx, key, value),
        ConfigAction::Get { key } => get_config(ctx, key),
    }
}

fn all_rows(ctx: &Context) -> Result<Vec<ConfigRow>> {
    let mut rows = Vec::new();

    rows.push(ConfigRow {
        key: "api_base_url".to_string(),
        value: ctx.client.base_url().to_string(),
        source: if std::env::var("WISHLINK_API_URL").is_ok() {
            "env"
        } else {
            "config"
        }
        .to_string(),
    });

    let session_path = session::get_session_path()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| "Unknown".to_string());
    rows.push(ConfigRow {
        key: "session_path".to_string(),
        value: session_path,
        source: if std::env::var("WISHLINK_SESSION_PATH").is_ok() {
            "env"
        } else {
            "default"
        }
        .to_string(),
    });

    let config_path = config::get_config_path()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| "Unknown".to_string());
    rows.push(ConfigRow {
        key: "config_path".to_string(),
        value: config_path,
        source: "default".to_string(),
    });

    Ok(rows)
}

fn show_config(ctx: &Context) -> Result<()> {
    let rows = all_rows(ctx)?;
    print_output(&rows, ctx.format)?;
    Ok(())
}

fn get_config(ctx: &Context, key: String) -> Result<()> {
    let rows = all_rows(ctx)?;
    if let Some(row) = rows.iter().find(|r| r.key.eq_ignore_ascii_case(&key)) {
        print_info(&format!("{} = {}", row.key, row.value), ctx.quiet);
    } else {
        print_error(&format!("Config key not found: {}", key));
    }
    Ok(())
}

fn set_config(ctx: &Context, key: String, value: String) -> Result<()> {
    match key.to_lowercase().as_str() {
        "api_base_url" => {
            let config = AppConfig {
                api_base_url: value.clone(),
            };
            config.save()?;
            print_success(&format!("Set api_base_url = {}", value), ctx.quiet);
        }
        _ => {
            print_error(&format!("Unknown config key: {}", key));
            print_info("Available keys: api_base_url", ctx.quiet);
        }
    }
    Ok(())
}
