//! Auth commands
//!
//! Login, registration, logout and session status.

use anyhow::Result;
use clap::Subcommand;

use super::Context;
use crate::output::{print_error, print_info, print_success};
use wishlink_core::PasswordCheck;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in and persist the session
    Login {
        /// Username
        username: String,

        /// Password
        #[arg(long, short)]
        password: String,
    },

    /// Register a new account
    Register {
        /// Username
        username: String,

        /// Password (>=8 chars, upper, lower and a digit)
        #[arg(long, short)]
        password: String,

        /// Password confirmation (defaults to the password itself)
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Log out and clear the persisted session
    Logout,

    /// Show who is currently logged in
    Status,
}

pub async fn execute(ctx: &Context, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Login { username, password } => login(ctx, username, password).await,
        AuthAction::Register {
            username,
            password,
            confirm,
        } => register(ctx, username, password, confirm).await,
        AuthAction::Logout => logout(ctx),
        AuthAction::Status => status(ctx),
    }
}

async fn login(ctx: &Context, username: String, password: String) -> Result<()> {
    let session = ctx.client.login(&username, &password).await?;
    ctx.store.save(&session)?;
    print_success(&format!("Logged in as {}", session.username), ctx.quiet);
    Ok(())
}

async fn register(
    ctx: &Context,
    username: String,
    password: String,
    confirm: Option<String>,
) -> Result<()> {
    let confirm = confirm.unwrap_or_else(|| password.clone());

    // Show which rules failed before the core gate rejects, like the form did
    let check = PasswordCheck::evaluate(&password);
    if !check.is_valid() && !ctx.quiet {
        for rule in check.failed_rules() {
            print_error(&format!("password needs {}", rule));
        }
    }

    ctx.client.register(&username, &password, &confirm).await?;
    print_success(
        &format!("Registered {}. You can now log in.", username),
        ctx.quiet,
    );
    Ok(())
}

fn logout(ctx: &Context) -> Result<()> {
    ctx.store.clear()?;
    print_success("Logged out.", ctx.quiet);
    Ok(())
}

fn status(ctx: &Context) -> Result<()> {
    match ctx.store.load()? {
        Some(session) => {
            print_info(
                &format!("Logged in as {} (user {})", session.username, session.user_id),
                ctx.quiet,
            );
        }
        None => print_info("Not logged in.", ctx.quiet),
    }
    Ok(())
}
