//! Checkout handlers.
//!
//! ## Commands
//! - Locking the selected seats (writes the cart)
//! - Completing the purchase (clears the cart)
//!
//! ## Queries
//! - The checkout view and its live countdown

mod complete_checkout;
mod countdown_ticker;
mod lock_seats;
mod view_checkout;

// Commands
pub use complete_checkout::{CompleteCheckoutHandler, CompleteCheckoutOutcome};
pub use lock_seats::{LockSeatsCommand, LockSeatsHandler, LockSeatsOutcome};

// Queries
pub use countdown_ticker::CountdownTicker;
pub use view_checkout::{CheckoutView, ViewCheckoutHandler};
