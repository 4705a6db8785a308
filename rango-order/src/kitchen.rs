use rango_shared::money::round_currency;
use rango_shared::{Amount, Role, StatusChangedEvent};
use crate::lifecycle::{Lifecycle, TerminalPolicy, Transition};
use crate::manager::OrderManager;
use crate::models::{OrderStatus, RestaurantOrder};
use crate::OrderResult;

/// Restaurant-side order board
pub struct KitchenBoard {
    orders: OrderManager<RestaurantOrder>,
}

impl KitchenBoard {
    pub fn new(orders: Vec<RestaurantOrder>, policy: TerminalPolicy) -> OrderResult<Self> {
        Ok(Self {
            orders: OrderManager::with_orders(Role::Restaurant, policy, orders)?,
        })
    }

    pub fn get(&self, order_id: &str) -> Option<&RestaurantOrder> {
        self.orders.get(order_id)
    }

    pub fn orders(&self) -> Vec<&RestaurantOrder> {
        self.orders.iter().collect()
    }

    /// Take the single next step: start preparing, mark ready, or dispatch.
    pub fn advance(&mut self, order_id: &str) -> OrderResult<Transition<OrderStatus>> {
        self.orders.advance_with(order_id, |_| None)
    }

    /// Orders not yet dispatched
    pub fn pending_count(&self) -> usize {
        self.orders.count_where(|s| !s.is_terminal())
    }

    pub fn with_status(&self, status: OrderStatus) -> Vec<&RestaurantOrder> {
        self.orders.with_status(|s| s == status)
    }

    /// Count per status in lifecycle order, every status present even when zero.
    pub fn count_by_status(&self) -> Vec<(OrderStatus, usize)> {
        OrderStatus::ALL
            .iter()
            .map(|&status| (status, self.orders.count_where(|s| s == status)))
            .collect()
    }

    /// Sum of order totals on the board
    pub fn revenue(&self) -> Amount {
        self.orders.iter().map(|o| o.total).sum()
    }

    /// Mean order total rounded to cents; zero on an empty board.
    pub fn average_order_value(&self) -> Amount {
        if self.orders.is_empty() {
            return Amount::ZERO;
        }
        round_currency(self.revenue() / Amount::from(self.orders.len()))
    }

    pub fn take_events(&mut self) -> Vec<StatusChangedEvent> {
        self.orders.take_events()
    }
}
