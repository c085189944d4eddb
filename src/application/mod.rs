//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are one per user action; [`Storefront`] wires them together.

mod errors;
pub mod handlers;
mod navigation;
pub mod polling;
mod storefront;

pub use errors::{StorefrontError, UserAction};
pub use navigation::Navigation;
pub use storefront::{
    Storefront, StorefrontSettings, HOME_MESSAGE, SUCCESS_HEADLINE, SUCCESS_MESSAGE,
    WALLET_MESSAGE,
};
