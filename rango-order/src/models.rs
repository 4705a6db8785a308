use chrono::NaiveTime;
use rango_shared::{Amount, Masked};
use serde::{Deserialize, Serialize};

use crate::lifecycle::{Lifecycle, TrackedOrder};

/// Restaurant-side order status: new → preparing → ready → dispatched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
    Dispatched,
}

impl Lifecycle for OrderStatus {
    const ALL: &'static [Self] = &[
        OrderStatus::New,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Dispatched,
    ];
    const INITIAL: Self = OrderStatus::New;

    fn next(self) -> Option<Self> {
        match self {
            OrderStatus::New => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Dispatched),
            OrderStatus::Dispatched => None,
        }
    }

    fn code(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Dispatched => "dispatched",
        }
    }
}

/// Courier-side delivery status: available → accepted → picked_up → delivered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Available,
    Accepted,
    PickedUp,
    Delivered,
}

impl Lifecycle for DeliveryStatus {
    const ALL: &'static [Self] = &[
        DeliveryStatus::Available,
        DeliveryStatus::Accepted,
        DeliveryStatus::PickedUp,
        DeliveryStatus::Delivered,
    ];
    const INITIAL: Self = DeliveryStatus::Available;

    fn next(self) -> Option<Self> {
        match self {
            DeliveryStatus::Available => Some(DeliveryStatus::Accepted),
            DeliveryStatus::Accepted => Some(DeliveryStatus::PickedUp),
            DeliveryStatus::PickedUp => Some(DeliveryStatus::Delivered),
            DeliveryStatus::Delivered => None,
        }
    }

    fn code(self) -> &'static str {
        match self {
            DeliveryStatus::Available => "available",
            DeliveryStatus::Accepted => "accepted",
            DeliveryStatus::PickedUp => "picked_up",
            DeliveryStatus::Delivered => "delivered",
        }
    }
}

impl DeliveryStatus {
    /// Accepted or picked up: the courier is working on it.
    pub fn is_active(self) -> bool {
        matches!(self, DeliveryStatus::Accepted | DeliveryStatus::PickedUp)
    }
}

/// A placed customer order as the restaurant sees it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantOrder {
    pub id: String,
    pub customer_name: String,
    /// Display names only, not linked to the menu
    pub items: Vec<String>,
    /// Fixed when the order is placed
    pub total: Amount,
    pub status: OrderStatus,
    pub order_time: NaiveTime,
    pub estimated_minutes: u32,
}

impl TrackedOrder for RestaurantOrder {
    type Status = OrderStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

/// A courier-facing unit of work tied to one restaurant order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryOrder {
    pub id: String,
    pub restaurant: String,
    pub customer: String,
    pub customer_phone: Masked<String>,
    pub pickup_address: String,
    pub delivery_address: String,
    pub distance_km: Amount,
    pub estimated_minutes: u32,
    /// What the courier earns for this run
    pub payout: Amount,
    pub status: DeliveryStatus,
    pub order_time: NaiveTime,
}

impl TrackedOrder for DeliveryOrder {
    type Status = DeliveryStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> DeliveryStatus {
        self.status
    }

    fn set_status(&mut self, status: DeliveryStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<S: Lifecycle>() -> Vec<S> {
        let mut seen = vec![S::INITIAL];
        let mut current = S::INITIAL;
        while let Some(next) = current.next() {
            seen.push(next);
            current = next;
        }
        seen
    }

    #[test]
    fn test_next_chain_matches_declared_order() {
        assert_eq!(walk::<OrderStatus>(), OrderStatus::ALL.to_vec());
        assert_eq!(walk::<DeliveryStatus>(), DeliveryStatus::ALL.to_vec());
    }

    #[test]
    fn test_only_last_status_is_terminal() {
        for (i, s) in OrderStatus::ALL.iter().enumerate() {
            assert_eq!(s.is_terminal(), i == OrderStatus::ALL.len() - 1);
        }
        assert!(DeliveryStatus::Delivered.is_terminal());
        assert!(!DeliveryStatus::PickedUp.is_terminal());
    }

    #[test]
    fn test_codes_match_serde_names() {
        for s in DeliveryStatus::ALL {
            let json = serde_json::to_string(s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.code()));
        }
        for s in OrderStatus::ALL {
            let json = serde_json::to_string(s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.code()));
        }
    }
}
