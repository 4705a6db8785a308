use rango_shared::{Amount, Role, StatusChangedEvent};

use crate::lifecycle::{HoldReason, TerminalPolicy, Transition};
use crate::manager::OrderManager;
use crate::models::{DeliveryOrder, DeliveryStatus};
use crate::OrderResult;

/// Courier-side delivery board.
///
/// Presence is supplied by the caller on every call rather than stored here.
/// Being offline hides available deliveries and blocks accepting them; it never
/// produces an error, and deliveries already in progress can still be completed.
pub struct DispatchBoard {
    deliveries: OrderManager<DeliveryOrder>,
}

impl DispatchBoard {
    pub fn new(deliveries: Vec<DeliveryOrder>, policy: TerminalPolicy) -> OrderResult<Self> {
        Ok(Self {
            deliveries: OrderManager::with_orders(Role::Courier, policy, deliveries)?,
        })
    }

    pub fn get(&self, delivery_id: &str) -> Option<&DeliveryOrder> {
        self.deliveries.get(delivery_id)
    }

    pub fn deliveries(&self) -> Vec<&DeliveryOrder> {
        self.deliveries.iter().collect()
    }

    /// Accept, pick up, or deliver, depending on the current status.
    pub fn advance(&mut self, delivery_id: &str, actor_online: bool) -> OrderResult<Transition<DeliveryStatus>> {
        self.deliveries.advance_with(delivery_id, |delivery| {
            (delivery.status == DeliveryStatus::Available && !actor_online).then_some(HoldReason::Offline)
        })
    }

    /// Deliveries open for acceptance. Empty whenever the courier is offline.
    pub fn available_orders(&self, actor_online: bool) -> Vec<&DeliveryOrder> {
        if !actor_online {
            return Vec::new();
        }
        self.deliveries.with_status(|s| s == DeliveryStatus::Available)
    }

    /// Accepted or picked up
    pub fn active_orders(&self) -> Vec<&DeliveryOrder> {
        self.deliveries.with_status(DeliveryStatus::is_active)
    }

    /// Completed runs
    pub fn delivered_orders(&self) -> Vec<&DeliveryOrder> {
        self.deliveries.with_status(|s| s == DeliveryStatus::Delivered)
    }

    /// Payout earned across delivered runs.
    pub fn earnings(&self) -> Amount {
        self.delivered_orders().iter().map(|d| d.payout).sum()
    }

    pub fn total_distance_km(&self) -> Amount {
        self.delivered_orders().iter().map(|d| d.distance_km).sum()
    }

    pub fn take_events(&mut self) -> Vec<StatusChangedEvent> {
        self.deliveries.take_events()
    }
}
