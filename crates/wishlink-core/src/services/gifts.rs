//! Gift/Wishlist repository - CRUD calls against the gift endpoints
//!
//! All list responses are validated after parsing; a gift whose reservation
//! fields contradict each other fails the whole fetch.

use chrono::Utc;
use reqwest::multipart;
use reqwest::Method;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::{
    validate_gifts, Gift, GiftDraft, Session, SharedWishlist, UserProfile, WishlistOwner,
};

impl ApiClient {
    /// GET /Gift/wishlist - the current user's own gifts. An empty list is a
    /// valid, displayable state.
    pub async fn list_my_gifts(&self, session: &Session) -> Result<Vec<Gift>> {
        let response = self
            .authed(Method::GET, "/Gift/wishlist", session)
            .send()
            .await?;
        let gifts: Vec<Gift> = Self::check(response).await?.json().await?;
        validate_gifts(&gifts)?;
        Ok(gifts)
    }

    /// GET /Gift/shared/{id} plus owner resolution, for the visitor view.
    ///
    /// The owner is re-resolved on every load so the "viewing my own shared
    /// link" gate never trusts stale data.
    pub async fn list_shared_gifts(
        &self,
        session: &Session,
        wishlist_id: &str,
    ) -> Result<SharedWishlist> {
        let response = self
            .authed(
                Method::GET,
                &format!("/Gift/shared/{}", wishlist_id),
                session,
            )
            .send()
            .await?;
        let gifts: Vec<Gift> = Self::check(response).await?.json().await?;
        validate_gifts(&gifts)?;

        let owner = self.wishlist_owner(session, wishlist_id).await?;
        let profile = self.user_profile(session, &owner.owner_id).await?;

        Ok(SharedWishlist {
            wishlist_id: wishlist_id.to_string(),
            owner_id: owner.owner_id,
            owner_username: profile.username,
            gifts,
        })
    }

    /// GET /Gift/reserved - gifts across all wishlists that the current user
    /// has reserved.
    pub async fn list_reserved_by_me(&self, session: &Session) -> Result<Vec<Gift>> {
        let response = self
            .authed(Method::GET, "/Gift/reserved", session)
            .send()
            .await?;
        let gifts: Vec<Gift> = Self::check(response).await?.json().await?;
        validate_gifts(&gifts)?;
        Ok(gifts)
    }

    /// GET /Gift/{id}
    pub async fn get_gift(&self, session: &Session, gift_id: &str) -> Result<Gift> {
        let response = self
            .authed(Method::GET, &format!("/Gift/{}", gift_id), session)
            .send()
            .await?;
        let gift: Gift = Self::check(response).await?.json().await?;
        gift.validate()?;
        Ok(gift)
    }

    /// POST /Gift - create a gift on the current user's wishlist.
    ///
    /// With an image the body is multipart (the image goes as file bytes in
    /// an `imageFile` part, never as a URL string); without one it is plain
    /// JSON.
    pub async fn create_gift(&self, session: &Session, draft: &GiftDraft) -> Result<Gift> {
        let request = self.authed(Method::POST, "/Gift", session);
        let request = match &draft.image {
            Some(path) => request.multipart(gift_form(draft, path).await?),
            None => request.json(draft),
        };
        let response = request.send().await?;
        let gift: Gift = Self::check(response).await?.json().await?;
        gift.validate()?;
        Ok(gift)
    }

    /// PUT /Gift/{id} - owner only (the server answers 403 otherwise).
    pub async fn update_gift(
        &self,
        session: &Session,
        gift_id: &str,
        draft: &GiftDraft,
    ) -> Result<Gift> {
        let request = self.authed(Method::PUT, &format!("/Gift/{}", gift_id), session);
        let request = match &draft.image {
            Some(path) => request.multipart(gift_form(draft, path).await?),
            None => request.json(draft),
        };
        let response = request.send().await?;
        let gift: Gift = Self::check(response).await?.json().await?;
        gift.validate()?;
        Ok(gift)
    }

    /// DELETE /Gift/{id} - owner only, irreversible. The CLI asks for
    /// confirmation before calling this.
    pub async fn delete_gift(&self, session: &Session, gift_id: &str) -> Result<()> {
        let response = self
            .authed(Method::DELETE, &format!("/Gift/{}", gift_id), session)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// GET /Wishlist/{id}/owner
    pub async fn wishlist_owner(
        &self,
        session: &Session,
        wishlist_id: &str,
    ) -> Result<WishlistOwner> {
        let response = self
            .authed(
                Method::GET,
                &format!("/Wishlist/{}/owner", wishlist_id),
                session,
            )
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// GET /User/{id} - resolve a display name.
    pub async fn user_profile(&self, session: &Session, user_id: &str) -> Result<UserProfile> {
        let response = self
            .authed(Method::GET, &format!("/User/{}", user_id), session)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

/// Build the multipart form for gift create/update with an image file.
async fn gift_form(draft: &GiftDraft, path: &std::path::Path) -> Result<multipart::Form> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = format!("photo_{}.jpg", Utc::now().timestamp_millis());
    let part = multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("image/jpeg")?;

    Ok(multipart::Form::new()
        .text("name", draft.name.clone())
        .text("price", draft.price.to_string())
        .text("category", draft.category.clone())
        .part("imageFile", part))
}
