//! Business logic services
//!
//! One reqwest client wraps the whole REST contract; gift and reservation
//! calls hang off it in their own modules.

pub mod client;
pub mod gifts;
pub mod reservations;

pub use client::ApiClient;
