//! Reserved-gifts commands - "gifts I will give"
//!
//! Lists the gifts the current user has reserved across all wishlists and
//! lets them release a reservation.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_output, print_success};
use wishlink_core::Gift;

#[derive(Subcommand)]
pub enum ReservedAction {
    /// List the gifts I have reserved
    List,

    /// Cancel one of my reservations
    Cancel {
        /// Gift id
        gift_id: String,
    },
}

/// Reserved gift row: includes the wishlist so the giver can find their way
/// back to the list the gift lives on.
#[derive(Debug, Serialize, Tabled)]
pub struct ReservedRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Wishlist")]
    pub wishlist: String,
}

impl From<&Gift> for ReservedRow {
    fn from(gift: &Gift) -> Self {
        Self {
            id: gift.id.clone(),
            name: gift.name.clone(),
            price: format!("${}", gift.price),
            category: gift.category.clone(),
            wishlist: gift.wishlist_id.clone().unwrap_or_default(),
        }
    }
}

pub async fn execute(ctx: &Context, action: ReservedAction) -> Result<()> {
    match action {
        ReservedAction::List => list(ctx).await,
        ReservedAction::Cancel { gift_id } => cancel(ctx, gift_id).await,
    }
}

async fn list(ctx: &Context) -> Result<()> {
    let session = ctx.store.require()?;
    let gifts = ctx.client.list_reserved_by_me(&session).await?;
    let rows: Vec<ReservedRow> = gifts.iter().map(ReservedRow::from).collect();
    print_output(&rows, ctx.format)?;
    Ok(())
}

async fn cancel(ctx: &Context, gift_id: String) -> Result<()> {
    let session = ctx.store.require()?;
    ctx.client.cancel_reservation(&session, &gift_id).await?;
    print_success("Reservation cancelled.", ctx.quiet);

    // Refresh the list after the cancel settles
    if !ctx.quiet {
        let gifts = ctx.client.list_reserved_by_me(&session).await?;
        let rows: Vec<ReservedRow> = gifts.iter().map(ReservedRow::from).collect();
        print_output(&rows, ctx.format)?;
    }
    Ok(())
}
