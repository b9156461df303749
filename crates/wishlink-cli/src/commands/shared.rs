//! Shared wishlist commands - the visitor surface
//!
//! Viewing a friend's wishlist through a share link and reserving gifts on
//! it. The owner gate is re-derived on every load; reservation controls are
//! never offered on one's own list.

use anyhow::Result;
use clap::Subcommand;

use super::{Context, GiftRow};
use crate::output::{print_info, print_output, print_success};
use wishlink_core::{
    apply_reservation, wishlist_id_from, Error, ReservationState, Session, SharedWishlist,
};

#[derive(Subcommand)]
pub enum SharedAction {
    /// View a shared wishlist by link or id
    View {
        /// Share link (wishlink:// or https://) or bare wishlist id
        link: String,
    },

    /// Reserve a gift on a shared wishlist
    Reserve {
        /// Share link or wishlist id
        link: String,

        /// Gift id to reserve
        gift_id: String,
    },
}

pub async fn execute(ctx: &Context, action: SharedAction) -> Result<()> {
    match action {
        SharedAction::View { link } => view(ctx, link).await,
        SharedAction::Reserve { link, gift_id } => reserve(ctx, link, gift_id).await,
    }
}

fn print_wishlist(ctx: &Context, shared: &SharedWishlist, session: &Session) -> Result<()> {
    print_info(
        &format!("{}'s wishlist", shared.owner_username),
        ctx.quiet,
    );
    let rows: Vec<GiftRow> = shared
        .gifts
        .iter()
        .map(|g| GiftRow::for_viewer(g, &session.username))
        .collect();
    print_output(&rows, ctx.format)?;
    Ok(())
}

async fn view(ctx: &Context, link: String) -> Result<()> {
    let session = ctx.store.require()?;
    let wishlist_id = wishlist_id_from(&link)?;
    let shared = ctx.client.list_shared_gifts(&session, &wishlist_id).await?;

    if shared.viewer_is_owner(&session) {
        // Own wishlist opened through its share link
        print_info(
            "This is your own wishlist - see `wishlink gift list`.",
            ctx.quiet,
        );
        return Ok(());
    }

    print_wishlist(ctx, &shared, &session)
}

/// Refuse a reservation the server would reject anyway. Errors carry the
/// same taxonomy the server's own refusals map onto, so either path exits
/// the CLI the same way.
fn check_can_reserve(
    shared: &SharedWishlist,
    session: &Session,
    gift_id: &str,
) -> std::result::Result<ReservationState, Error> {
    if shared.viewer_is_owner(session) {
        return Err(Error::Forbidden(
            "you cannot reserve gifts on your own wishlist".to_string(),
        ));
    }
    let gift = shared
        .gifts
        .iter()
        .find(|g| g.id == gift_id)
        .ok_or_else(|| Error::not_found(format!("gift {} is not on this wishlist", gift_id)))?;

    match ReservationState::of(gift, &session.username) {
        ReservationState::ReservedByOther => Err(Error::Conflict(
            "this gift is already reserved by someone else".to_string(),
        )),
        state => Ok(state),
    }
}

async fn reserve(ctx: &Context, link: String, gift_id: String) -> Result<()> {
    let session = ctx.store.require()?;
    let wishlist_id = wishlist_id_from(&link)?;
    let mut shared = ctx.client.list_shared_gifts(&session, &wishlist_id).await?;

    if check_can_reserve(&shared, &session, &gift_id)? == ReservationState::ReservedByMe {
        // Desired state already holds; nothing to do
        print_info("You already reserved this gift.", ctx.quiet);
        return Ok(());
    }

    match ctx.client.reserve(&session, &gift_id).await {
        Ok(reservation) => {
            // Local state comes from the server payload, not an assumption
            apply_reservation(&mut shared.gifts, &gift_id, &reservation);
            print_success(
                &format!("Gift reserved by {}.", reservation.reserved_by),
                ctx.quiet,
            );
            print_wishlist(ctx, &shared, &session)
        }
        Err(Error::Conflict(msg)) => {
            // Lost the race: re-fetch instead of patching local state
            let refreshed = ctx.client.list_shared_gifts(&session, &wishlist_id).await?;
            print_wishlist(ctx, &refreshed, &session)?;
            Err(Error::Conflict(msg).into())
        }
        Err(e) => Err(e.into()),
    }
}
