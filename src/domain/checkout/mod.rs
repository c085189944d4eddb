//! Checkout domain - holds, the expiry countdown, and the cart hand-off.

mod cart;
mod countdown;
mod hold;

pub use cart::{CheckoutCart, CART_KEY};
pub use countdown::Countdown;
pub use hold::Hold;
