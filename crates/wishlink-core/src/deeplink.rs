//! Deep link parsing and share-link generation
//!
//! A shared wishlist travels as `wishlink://wishlist/{id}` (or the older
//! `wishlink://wishlist/shared/{id}` form) plus a matching https link for
//! people without the app. Anything that routes is a shared wishlist id.

use crate::error::{Error, Result};

/// URL scheme the app registers.
pub const SCHEME: &str = "wishlink";

/// Web fallback host used in share links.
pub const WEB_BASE: &str = "https://wishlink.app";

/// A parsed deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    SharedWishlist { wishlist_id: String },
}

/// Parse a deep link or web share link into a route.
///
/// Accepted forms:
/// - `wishlink://wishlist/{id}`
/// - `wishlink://wishlist/shared/{id}`
/// - `https://wishlink.app/wishlist/shared/{id}` (and the bare-path variants)
pub fn parse(url: &str) -> Result<DeepLink> {
    let rest = if let Some(rest) = url.strip_prefix(&format!("{}://", SCHEME)) {
        rest
    } else if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        // Web link: only our own host routes
        let (host, path) = rest
            .split_once('/')
            .ok_or_else(|| Error::validation(format!("link has no path: {:?}", url)))?;
        let expected_host = WEB_BASE.trim_start_matches("https://");
        if !host.eq_ignore_ascii_case(expected_host) {
            return Err(Error::validation(format!(
                "not a wishlink link: {:?}",
                url
            )));
        }
        path
    } else {
        return Err(Error::validation(format!(
            "not a wishlink link: {:?}",
            url
        )));
    };

    let segments: Vec<&str> = rest
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        ["wishlist", id] => Ok(DeepLink::SharedWishlist {
            wishlist_id: (*id).to_string(),
        }),
        ["wishlist", "shared", id] => Ok(DeepLink::SharedWishlist {
            wishlist_id: (*id).to_string(),
        }),
        _ => Err(Error::validation(format!(
            "unrecognized wishlink route: {:?}",
            url
        ))),
    }
}

/// Accept either a bare wishlist id or any of the link forms.
pub fn wishlist_id_from(input: &str) -> Result<String> {
    if input.contains("://") {
        let DeepLink::SharedWishlist { wishlist_id } = parse(input)?;
        Ok(wishlist_id)
    } else if !input.trim().is_empty() && !input.contains('/') {
        Ok(input.trim().to_string())
    } else {
        Err(Error::validation(format!(
            "not a wishlist id or link: {:?}",
            input
        )))
    }
}

/// Deep link for sharing a wishlist.
pub fn deep_link(wishlist_id: &str) -> String {
    format!("{}://wishlist/shared/{}", SCHEME, wishlist_id)
}

/// Web fallback link for sharing a wishlist.
pub fn web_link(wishlist_id: &str) -> String {
    format!("{}/wishlist/shared/{}", WEB_BASE, wishlist_id)
}
