//! CheckoutCart - the hand-off from the seat map to checkout.
//!
//! Written when a hold is granted, read on the checkout view, removed once
//! the purchase completes. The JSON shape is
//! `{groupId, expiresAt, selectedSeats, totalPrice}`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GroupId, Money, Timestamp};
use crate::domain::seating::Seat;

use super::Countdown;

/// Storage key the cart lives under.
pub const CART_KEY: &str = "checkout_data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCart {
    pub group_id: GroupId,
    pub expires_at: Timestamp,
    pub selected_seats: Vec<Seat>,
    pub total_price: Money,
}

impl CheckoutCart {
    /// Builds a cart for a granted hold; the total is the sum of seat prices.
    pub fn new(group_id: GroupId, expires_at: Timestamp, selected_seats: Vec<Seat>) -> Self {
        let total_price = selected_seats.iter().map(|s| s.price).sum();
        Self {
            group_id,
            expires_at,
            selected_seats,
            total_price,
        }
    }

    pub fn countdown_at(&self, now: Timestamp) -> Countdown {
        Countdown::between(now, self.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seating::mock_seats;

    fn cart() -> CheckoutCart {
        let seats = vec![mock_seats()[0].clone(), mock_seats()[3].clone()];
        CheckoutCart::new(
            GroupId::new("g-1").unwrap(),
            Timestamp::parse("2025-06-01T18:00:00Z").unwrap(),
            seats,
        )
    }

    #[test]
    fn total_is_sum_of_seat_prices() {
        assert_eq!(cart().total_price, Money::from_dollars(430));
    }

    #[test]
    fn serializes_with_storefront_field_names() {
        let json = serde_json::to_value(cart()).unwrap();
        assert_eq!(json["groupId"], "g-1");
        assert_eq!(json["totalPrice"], 430);
        assert_eq!(json["selectedSeats"][0]["id"], "101-A-1");
        assert!(json["expiresAt"].as_str().unwrap().starts_with("2025-06-01T18:00:00"));
    }
}
