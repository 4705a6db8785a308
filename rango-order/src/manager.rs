use rango_shared::{Role, StatusChangedEvent};
use std::collections::HashMap;

use crate::lifecycle::{HoldReason, Lifecycle, TerminalPolicy, TrackedOrder, Transition};
use crate::{OrderError, OrderResult};

/// Owns one role's order collection and moves orders through their lifecycle.
///
/// Orders keep their insertion order for listing. Each call touches only the
/// order it names, and every forward step is recorded in an outbox of
/// [`StatusChangedEvent`]s until the caller drains it.
pub struct OrderManager<O: TrackedOrder> {
    role: Role,
    policy: TerminalPolicy,
    orders: Vec<O>,
    index: HashMap<String, usize>,
    outbox: Vec<StatusChangedEvent>,
}

impl<O: TrackedOrder> OrderManager<O> {
    pub fn new(role: Role, policy: TerminalPolicy) -> Self {
        Self {
            role,
            policy,
            orders: Vec::new(),
            index: HashMap::new(),
            outbox: Vec::new(),
        }
    }

    /// Build a manager pre-loaded with seed orders.
    pub fn with_orders(role: Role, policy: TerminalPolicy, orders: Vec<O>) -> OrderResult<Self> {
        let mut manager = Self::new(role, policy);
        for order in orders {
            manager.insert(order)?;
        }
        Ok(manager)
    }

    pub fn insert(&mut self, order: O) -> OrderResult<()> {
        if self.index.contains_key(order.id()) {
            return Err(OrderError::Duplicate(order.id().to_string()));
        }

        self.index.insert(order.id().to_string(), self.orders.len());
        self.orders.push(order);
        Ok(())
    }

    pub fn get(&self, order_id: &str) -> Option<&O> {
        self.index.get(order_id).map(|&i| &self.orders[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &O> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders whose status satisfies `pred`, in insertion order.
    pub fn with_status(&self, pred: impl Fn(O::Status) -> bool) -> Vec<&O> {
        self.orders.iter().filter(|o| pred(o.status())).collect()
    }

    pub fn count_where(&self, pred: impl Fn(O::Status) -> bool) -> usize {
        self.orders.iter().filter(|o| pred(o.status())).count()
    }

    /// Move an order one step forward.
    ///
    /// `guard` runs only for non-terminal orders and may hold the order in place
    /// by returning a reason. Terminal orders follow the configured
    /// [`TerminalPolicy`].
    pub fn advance_with(
        &mut self,
        order_id: &str,
        guard: impl FnOnce(&O) -> Option<HoldReason>,
    ) -> OrderResult<Transition<O::Status>> {
        let role = self.role;
        let policy = self.policy;
        let order = self.get_order_mut(order_id)?;
        let current = order.status();

        let Some(next) = current.next() else {
            return match policy {
                TerminalPolicy::Ignore => {
                    tracing::debug!("Order {} already {}; nothing to advance", order_id, current.code());
                    Ok(Transition::Held { status: current, reason: HoldReason::Terminal })
                }
                TerminalPolicy::Reject => {
                    tracing::warn!("Rejected advance of terminal order {} ({})", order_id, current.code());
                    Err(OrderError::InvalidTransition {
                        id: order_id.to_string(),
                        status: current.code(),
                    })
                }
            };
        };

        if let Some(reason) = guard(&*order) {
            tracing::warn!("Order {} held at {}: {:?}", order_id, current.code(), reason);
            return Ok(Transition::Held { status: current, reason });
        }

        order.set_status(next);
        tracing::info!("Order {} moved {} -> {}", order_id, current.code(), next.code());

        self.outbox.push(StatusChangedEvent::new(role, order_id, current.code(), next.code()));
        Ok(Transition::Advanced { from: current, to: next })
    }

    /// Hand over and clear recorded status changes.
    pub fn take_events(&mut self) -> Vec<StatusChangedEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn get_order_mut(&mut self, order_id: &str) -> OrderResult<&mut O> {
        let i = *self.index.get(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        Ok(&mut self.orders[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderStatus, RestaurantOrder};
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn order(id: &str, status: OrderStatus) -> RestaurantOrder {
        RestaurantOrder {
            id: id.to_string(),
            customer_name: "Test Customer".to_string(),
            items: vec!["Burger".to_string()],
            total: Decimal::new(2890, 2),
            status,
            order_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            estimated_minutes: 25,
        }
    }

    fn manager(policy: TerminalPolicy) -> OrderManager<RestaurantOrder> {
        OrderManager::with_orders(Role::Restaurant, policy, vec![
            order("001", OrderStatus::New),
            order("002", OrderStatus::Dispatched),
        ]).unwrap()
    }

    #[test]
    fn test_advance_records_event() {
        let mut manager = manager(TerminalPolicy::Ignore);

        let t = manager.advance_with("001", |_| None).unwrap();
        assert_eq!(t, Transition::Advanced { from: OrderStatus::New, to: OrderStatus::Preparing });

        let events = manager.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].order_id, "001");
        assert_eq!(events[0].role, Role::Restaurant);
        assert_eq!((events[0].from.as_str(), events[0].to.as_str()), ("new", "preparing"));
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut manager = manager(TerminalPolicy::Ignore);
        let before: Vec<OrderStatus> = manager.iter().map(|o| o.status).collect();

        let err = manager.advance_with("999", |_| None).unwrap_err();
        assert_eq!(err, OrderError::NotFound("999".to_string()));

        let after: Vec<OrderStatus> = manager.iter().map(|o| o.status).collect();
        assert_eq!(before, after);
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn test_terminal_ignore_policy() {
        let mut manager = manager(TerminalPolicy::Ignore);
        let t = manager.advance_with("002", |_| None).unwrap();
        assert_eq!(t, Transition::Held { status: OrderStatus::Dispatched, reason: HoldReason::Terminal });
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn test_terminal_reject_policy() {
        let mut manager = manager(TerminalPolicy::Reject);
        let err = manager.advance_with("002", |_| None).unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition { status: "dispatched", .. }));
        assert_eq!(manager.get("002").unwrap().status, OrderStatus::Dispatched);
    }

    #[test]
    fn test_guard_holds_order() {
        let mut manager = manager(TerminalPolicy::Ignore);
        let t = manager.advance_with("001", |_| Some(HoldReason::Offline)).unwrap();
        assert!(!t.is_advanced());
        assert_eq!(manager.get("001").unwrap().status, OrderStatus::New);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut manager = manager(TerminalPolicy::Ignore);
        let err = manager.insert(order("001", OrderStatus::Ready)).unwrap_err();
        assert_eq!(err, OrderError::Duplicate("001".to_string()));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get("001").unwrap().status, OrderStatus::New);
    }
}
