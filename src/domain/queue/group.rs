//! Group - one queue/checkout participant unit.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BuyerId, EventId, GroupId};

/// A party moving through the queue and checkout together.
///
/// Up to two buyers and two watchers. `locked` is set once the group holds
/// seats, `in_checkout` once it has moved on to payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub event_id: EventId,
    #[serde(default)]
    pub buyer1_id: Option<BuyerId>,
    #[serde(default)]
    pub buyer2_id: Option<BuyerId>,
    #[serde(default)]
    pub watch1_id: Option<BuyerId>,
    #[serde(default)]
    pub watch2_id: Option<BuyerId>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub in_checkout: bool,
    #[serde(default)]
    pub queue_position: Option<u32>,
}

impl Group {
    /// Creates a fresh group with a single buyer.
    pub fn new(id: GroupId, event_id: EventId, buyer: BuyerId) -> Self {
        Self {
            id,
            event_id,
            buyer1_id: Some(buyer),
            buyer2_id: None,
            watch1_id: None,
            watch2_id: None,
            locked: false,
            in_checkout: false,
            queue_position: None,
        }
    }

    /// Buyers present in the group, in slot order.
    pub fn buyers(&self) -> Vec<&BuyerId> {
        [&self.buyer1_id, &self.buyer2_id]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Watchers present in the group, in slot order.
    pub fn watchers(&self) -> Vec<&BuyerId> {
        [&self.watch1_id, &self.watch2_id]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> Group {
        Group::new(
            GroupId::new("g-1").unwrap(),
            EventId::new("demo-event").unwrap(),
            BuyerId::new("demo-user-1").unwrap(),
        )
    }

    #[test]
    fn new_group_has_one_buyer() {
        let g = group();
        assert_eq!(g.buyers().len(), 1);
        assert!(g.watchers().is_empty());
        assert!(!g.locked);
        assert!(!g.in_checkout);
    }

    #[test]
    fn watchers_skip_empty_slots() {
        let mut g = group();
        g.watch2_id = Some(BuyerId::new("fan-2").unwrap());
        let watchers: Vec<_> = g.watchers().iter().map(|w| w.as_str()).collect();
        assert_eq!(watchers, vec!["fan-2"]);
    }

    #[test]
    fn deserializes_backend_payload_with_nulls() {
        let json = r#"{
            "id": "g-9",
            "event_id": "demo-event",
            "buyer1_id": "demo-user-1",
            "buyer2_id": null,
            "watch1_id": null,
            "watch2_id": null,
            "locked": false,
            "in_checkout": false,
            "queue_position": 12
        }"#;
        let g: Group = serde_json::from_str(json).unwrap();
        assert_eq!(g.id.as_str(), "g-9");
        assert_eq!(g.queue_position, Some(12));
        assert!(g.buyer2_id.is_none());
    }
}
