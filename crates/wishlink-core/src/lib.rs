//! # wishlink-core
//!
//! Client-side contracts for the Wishlink gift-wishlist service.
//!
//! This crate provides:
//! - Session persistence and credential validation (`session`, `auth` modules)
//! - Typed wire models (`models` module)
//! - The REST client: gift repository and reservation coordinator (`services` module)
//! - Deep link parsing (`deeplink` module)
//! - App configuration (`config` module)
//! - Unified error handling (`error` module)

pub mod auth;
pub mod config;
pub mod deeplink;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

// Re-exports for convenience
pub use config::AppConfig;
pub use error::{classify_response, Error, Result};
pub use services::ApiClient;
pub use session::SessionStore;

// Re-export commonly used types from models
pub use models::{
    parse_price, validate_gifts, AuthRequest, Gift, GiftDraft, Reservation, ReservationState,
    Session, SharedWishlist, UserProfile, WishlistOwner,
};

// Re-export commonly used helpers
pub use auth::{validate_registration, PasswordCheck};
pub use deeplink::{deep_link, web_link, wishlist_id_from, DeepLink};
pub use services::reservations::{apply_reservation, clear_reservation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
