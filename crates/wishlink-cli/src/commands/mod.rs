//! CLI commands module
//!
//! One submodule per surface of the app: auth, my wishlist, shared
//! wishlists, reserved gifts, and config.

pub mod auth;
pub mod config;
pub mod gift;
pub mod reserved;
pub mod shared;

use serde::Serialize;
use tabled::Tabled;
use wishlink_core::{ApiClient, Gift, ReservationState, SessionStore};

use crate::output::OutputFormat;

/// Shared context for all commands
pub struct Context {
    pub client: ApiClient,
    pub store: SessionStore,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Gift row for table display, projected for a specific viewer.
#[derive(Debug, Serialize, Tabled)]
pub struct GiftRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl GiftRow {
    /// Project a gift for the given viewer's username.
    pub fn for_viewer(gift: &Gift, viewer: &str) -> Self {
        Self {
            id: gift.id.clone(),
            name: gift.name.clone(),
            price: format!("${}", gift.price),
            category: gift.category.clone(),
            status: ReservationState::of(gift, viewer).as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_row_projection() {
        let gift = Gift {
            id: "g-1".to_string(),
            name: "Bike".to_string(),
            category: "Sports".to_string(),
            price: 120.0,
            image_url: None,
            wishlist_id: None,
            reserved: true,
            reserved_by_username: Some("bob".to_string()),
            created_at: None,
        };
        let row = GiftRow::for_viewer(&gift, "bob");
        assert_eq!(row.price, "$120");
        assert_eq!(row.status, "reserved by me");

        let row = GiftRow::for_viewer(&gift, "carol");
        assert_eq!(row.status, "reserved");
    }
}
