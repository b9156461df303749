//! Reservation coordinator - reserve and cancel-reserve calls
//!
//! Local state is updated only from the server-confirmed payload, never
//! optimistically before the call settles. A `Conflict` means someone else
//! got there first; callers re-fetch the list instead of patching it.

use reqwest::Method;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::{Gift, Reservation, Session};

impl ApiClient {
    /// POST /Gift/{id}/reserve. Fail-capable by design: the server rejects a
    /// second reservation with a conflict, and the client must not assume
    /// success locally.
    pub async fn reserve(&self, session: &Session, gift_id: &str) -> Result<Reservation> {
        let response = self
            .authed(Method::POST, &format!("/Gift/{}/reserve", gift_id), session)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// POST /Gift/{id}/cancel-reserve. Only the holder of the reservation may
    /// cancel; anyone else gets a 403 or 404 from the server.
    pub async fn cancel_reservation(&self, session: &Session, gift_id: &str) -> Result<()> {
        let response = self
            .authed(
                Method::POST,
                &format!("/Gift/{}/cancel-reserve", gift_id),
                session,
            )
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

/// Apply a confirmed reservation to a local gift list.
///
/// This is the only way a reserve call mutates local state - the username
/// comes from the server payload, not from the session.
pub fn apply_reservation(gifts: &mut [Gift], gift_id: &str, reservation: &Reservation) {
    if let Some(gift) = gifts.iter_mut().find(|g| g.id == gift_id) {
        gift.reserved = true;
        gift.reserved_by_username = Some(reservation.reserved_by.clone());
    }
}

/// Clear a cancelled reservation from a local gift list.
pub fn clear_reservation(gifts: &mut [Gift], gift_id: &str) {
    if let Some(gift) = gifts.iter_mut().find(|g| g.id == gift_id) {
        gift.reserved = false;
        gift.reserved_by_username = None;
    }
}
