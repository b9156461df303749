//! Gift commands - the "my wishlist" surface
//!
//! List, inspect, create, edit and delete gifts on the current user's own
//! wishlist, plus printing the share links for it.

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use super::{Context, GiftRow};
use crate::output::{confirm, print_info, print_output, print_single, print_success};
use wishlink_core::{deep_link, parse_price, web_link, GiftDraft};

#[derive(Subcommand)]
pub enum GiftAction {
    /// List the gifts on my wishlist
    List,

    /// Show one gift
    Show {
        /// Gift id
        id: String,
    },

    /// Add a gift to my wishlist
    Add {
        /// Gift name
        name: String,

        /// Price (positive number)
        #[arg(long, short)]
        price: String,

        /// Category
        #[arg(long, short)]
        category: String,

        /// Optional image file, uploaded as binary content
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Edit a gift (unset fields keep their current value)
    Edit {
        /// Gift id
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New price
        #[arg(long, short)]
        price: Option<String>,

        /// New category
        #[arg(long, short)]
        category: Option<String>,

        /// New image file
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a gift (asks for confirmation)
    Delete {
        /// Gift id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Print the share links for my wishlist
    Share,
}

pub async fn execute(ctx: &Context, action: GiftAction) -> Result<()> {
    match action {
        GiftAction::List => list(ctx).await,
        GiftAction::Show { id } => show(ctx, id).await,
        GiftAction::Add {
            name,
            price,
            category,
            image,
        } => add(ctx, name, price, category, image).await,
        GiftAction::Edit {
            id,
            name,
            price,
            category,
            image,
        } => edit(ctx, id, name, price, category, image).await,
        GiftAction::Delete { id, yes } => delete(ctx, id, yes).await,
        GiftAction::Share => share(ctx).await,
    }
}

async fn list(ctx: &Context) -> Result<()> {
    let session = ctx.store.require()?;
    let gifts = ctx.client.list_my_gifts(&session).await?;
    let rows: Vec<GiftRow> = gifts
        .iter()
        .map(|g| GiftRow::for_viewer(g, &session.username))
        .collect();
    print_output(&rows, ctx.format)?;
    Ok(())
}

async fn show(ctx: &Context, id: String) -> Result<()> {
    let session = ctx.store.require()?;
    let gift = ctx.client.get_gift(&session, &id).await?;
    print_single(&GiftRow::for_viewer(&gift, &session.username), ctx.format)?;
    if let Some(url) = &gift.image_url {
        print_info(&format!("Image: {}", url), ctx.quiet);
    }
    Ok(())
}

async fn add(
    ctx: &Context,
    name: String,
    price: String,
    category: String,
    image: Option<PathBuf>,
) -> Result<()> {
    let session = ctx.store.require()?;
    let mut draft = GiftDraft::from_input(&name, &price, &category)?;
    if let Some(path) = image {
        draft = draft.with_image(path);
    }

    let gift = ctx.client.create_gift(&session, &draft).await?;
    print_success(&format!("Added gift: {}", gift.name), ctx.quiet);
    if !ctx.quiet {
        print_single(&GiftRow::for_viewer(&gift, &session.username), ctx.format)?;
    }
    Ok(())
}

async fn edit(
    ctx: &Context,
    id: String,
    name: Option<String>,
    price: Option<String>,
    category: Option<String>,
    image: Option<PathBuf>,
) -> Result<()> {
    let session = ctx.store.require()?;

    // Prefill from the current gift so unset flags keep their values
    let current = ctx.client.get_gift(&session, &id).await?;
    let name = name.unwrap_or(current.name);
    let category = category.unwrap_or(current.category);
    let price = match price {
        Some(text) => parse_price(&text)?,
        None => current.price,
    };

    let mut draft = GiftDraft::from_input(&name, &price.to_string(), &category)?;
    if let Some(path) = image {
        draft = draft.with_image(path);
    }

    let gift = ctx.client.update_gift(&session, &id, &draft).await?;
    print_success(&format!("Updated gift: {}", gift.name), ctx.quiet);
    Ok(())
}

async fn delete(ctx: &Context, id: String, yes: bool) -> Result<()> {
    let session = ctx.store.require()?;
    let gift = ctx.client.get_gift(&session, &id).await?;

    if !confirm(
        &format!("Delete \"{}\"? This cannot be undone.", gift.name),
        yes,
    )? {
        print_info("Cancelled.", ctx.quiet);
        return Ok(());
    }

    ctx.client.delete_gift(&session, &id).await?;
    print_success(&format!("Deleted gift: {}", gift.name), ctx.quiet);
    Ok(())
}

async fn share(ctx: &Context) -> Result<()> {
    let session = ctx.store.require()?;

    // The wishlist id comes from the gifts themselves when there are any;
    // an empty wishlist falls back to the user id, which the backend also
    // accepts as a wishlist identifier.
    let gifts = ctx.client.list_my_gifts(&session).await?;
    let wishlist_id = gifts
        .iter()
        .find_map(|g| g.wishlist_id.clone())
        .unwrap_or_else(|| session.user_id.clone());

    print_info("Here's my wishlist:", ctx.quiet);
    println!("{}", deep_link(&wishlist_id));
    println!("{}", web_link(&wishlist_id));
    Ok(())
}
