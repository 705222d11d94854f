//! Order status and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Lifecycle state of an order.
///
/// ```text
/// PLACED ─▶ ACCEPTED ─▶ COOKING ─▶ READY ─(assign courier)─▶ IN_DELIVERY ─▶ DELIVERED
///    │          │           │         │
///    └──────────┴───────────┴─────────┴──▶ CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Accepted,
    Cooking,
    Ready,
    InDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Placed,
        OrderStatus::Accepted,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::InDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Targets a restaurant admin may request from this status.
    ///
    /// `READY -> IN_DELIVERY` is not listed: it only happens together with
    /// a courier assignment.
    pub fn restaurant_targets(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Placed => &[Accepted, Cancelled],
            Accepted => &[Cooking, Cancelled],
            Cooking => &[Ready, Cancelled],
            Ready => &[Cancelled],
            InDelivery | Delivered | Cancelled => &[],
        }
    }

    pub fn admits_restaurant_transition(self, target: OrderStatus) -> bool {
        self.restaurant_targets().contains(&target)
    }

    /// The single move a courier can make.
    pub fn admits_courier_transition(self, target: OrderStatus) -> bool {
        self == OrderStatus::InDelivery && target == OrderStatus::Delivered
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Still being worked on by the restaurant or a courier.
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    /// Whether a courier is attached to an order in this status.
    pub fn has_courier(self) -> bool {
        matches!(self, OrderStatus::InDelivery | OrderStatus::Delivered)
    }

    /// Human label used in notifications.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Cooking => "In preparation",
            OrderStatus::Ready => "Ready",
            OrderStatus::InDelivery => "On the way",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Ready => "READY",
            OrderStatus::InDelivery => "IN_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(code)
    }
}

#[cfg(test)]
mod tests {
    use super::OrderStatus::{self, *};

    const RESTAURANT_TABLE: &[(OrderStatus, OrderStatus)] = &[
        (Placed, Accepted),
        (Placed, Cancelled),
        (Accepted, Cooking),
        (Accepted, Cancelled),
        (Cooking, Ready),
        (Cooking, Cancelled),
        (Ready, Cancelled),
    ];

    #[test]
    fn restaurant_transitions_match_the_table_exactly() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = RESTAURANT_TABLE.contains(&(from, to));
                assert_eq!(
                    from.admits_restaurant_transition(to),
                    expected,
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn courier_can_only_deliver() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = from == InDelivery && to == Delivered;
                assert_eq!(from.admits_courier_transition(to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn terminal_states_have_no_way_out() {
        for status in [Delivered, Cancelled] {
            assert!(status.is_terminal());
            assert!(status.restaurant_targets().is_empty());
            assert!(!OrderStatus::ALL
                .iter()
                .any(|to| status.admits_courier_transition(*to)));
        }
    }

    #[test]
    fn cancellation_is_only_reachable_before_a_courier_exists() {
        for from in OrderStatus::ALL {
            if from.admits_restaurant_transition(Cancelled) {
                assert!(!from.has_courier(), "{from} can be cancelled with a courier attached");
            }
        }
    }

    #[test]
    fn labels_and_codes() {
        assert_eq!(Cooking.label(), "In preparation");
        assert_eq!(InDelivery.label(), "On the way");
        assert_eq!(InDelivery.to_string(), "IN_DELIVERY");
    }
}
