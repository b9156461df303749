//! Data models for the Wishlink client
//!
//! Everything here mirrors the backend's wire contract. Responses are
//! deserialized into these types with explicit field names so a malformed
//! payload is rejected when it is parsed, not when it is rendered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Role sent with both auth requests. The backend only knows this one.
pub const USER_ROLE: &str = "user";

/// An authenticated session: the bearer token plus the identity it belongs to.
///
/// This is the exact shape of the login response. The live backend has
/// answered with both `token` and `Token` across revisions, so both spellings
/// are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(alias = "Token")]
    pub token: String,
    pub user_id: String,
    pub username: String,
}

/// Body for POST /Auth/login and /Auth/register.
///
/// The field is named `passwordHash` on the wire but carries the password the
/// user typed; hashing happens server-side. Write-only, never read back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl AuthRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password.into(),
            role: USER_ROLE.to_string(),
        }
    }
}

/// Gift model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub wishlist_id: Option<String>,
    #[serde(default)]
    pub reserved: bool,
    #[serde(default)]
    pub reserved_by_username: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Gift {
    /// Check the reservation invariant: `reservedByUsername` is present if
    /// and only if `reserved` is true. A payload that violates it is treated
    /// as malformed rather than trusted.
    pub fn validate(&self) -> Result<()> {
        if self.reserved != self.reserved_by_username.is_some() {
            return Err(Error::validation(format!(
                "gift {}: reserved={} but reservedByUsername is {}",
                self.id,
                self.reserved,
                if self.reserved_by_username.is_some() {
                    "set"
                } else {
                    "missing"
                }
            )));
        }
        Ok(())
    }
}

/// Validate a whole list of gifts as fetched from the server.
pub fn validate_gifts(gifts: &[Gift]) -> Result<()> {
    for gift in gifts {
        gift.validate()?;
    }
    Ok(())
}

/// Fields for creating or updating a gift.
///
/// `name`, `price` and `category` are mandatory; the image is an optional
/// local file uploaded as multipart content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftDraft {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(skip)]
    pub image: Option<PathBuf>,
}

impl GiftDraft {
    /// Build a draft from raw user input, running the client-side validation
    /// gate before anything touches the network.
    pub fn from_input(name: &str, price_text: &str, category: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("gift name is required"));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::validation("gift category is required"));
        }
        let price = parse_price(price_text)?;
        Ok(Self {
            name: name.to_string(),
            price,
            category: category.to_string(),
            image: None,
        })
    }

    pub fn with_image(mut self, path: PathBuf) -> Self {
        self.image = Some(path);
        self
    }
}

/// Parse a price from user text input. Must be a positive number.
pub fn parse_price(text: &str) -> Result<f64> {
    let trimmed = text.trim().trim_start_matches('$');
    let price: f64 = trimmed
        .parse()
        .map_err(|_| Error::validation(format!("price is not a number: {:?}", text)))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(Error::validation("price must be a positive number"));
    }
    Ok(price)
}

/// Response of POST /Gift/{id}/reserve.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reserved_by: String,
}

/// Response of GET /Wishlist/{id}/owner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistOwner {
    pub owner_id: String,
}

/// Response of GET /User/{id} - just enough to label a wishlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
}

/// A shared wishlist resolved for a visitor: the gifts plus who owns them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedWishlist {
    pub wishlist_id: String,
    pub owner_id: String,
    pub owner_username: String,
    pub gifts: Vec<Gift>,
}

impl SharedWishlist {
    /// The owner of a wishlist never gets reservation controls for their own
    /// gifts. Re-derived from the session on every shared load.
    pub fn viewer_is_owner(&self, session: &Session) -> bool {
        self.owner_id == session.user_id
    }
}

/// A gift's reservation state as seen by one viewer.
///
/// `Available -> ReservedByMe | ReservedByOther` on reserve;
/// `ReservedByMe -> Available` on cancel. `ReservedByOther` is terminal from
/// this viewer's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationState {
    Available,
    ReservedByMe,
    ReservedByOther,
}

impl ReservationState {
    /// Project a gift's server state onto the current viewer.
    pub fn of(gift: &Gift, viewer_username: &str) -> Self {
        match gift.reserved_by_username.as_deref() {
            None => ReservationState::Available,
            Some(name) if name == viewer_username => ReservationState::ReservedByMe,
            Some(_) => ReservationState::ReservedByOther,
        }
    }

    pub fn can_reserve(&self) -> bool {
        matches!(self, ReservationState::Available)
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self, ReservationState::ReservedByMe)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationState::Available => "available",
            ReservationState::ReservedByMe => "reserved by me",
            ReservationState::ReservedByOther => "reserved",
        }
    }
}
