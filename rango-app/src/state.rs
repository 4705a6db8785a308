use rango_catalog::{Menu, RestaurantDirectory};
use rango_order::{
    DeliveryOrder, DeliveryStatus, DispatchBoard, KitchenBoard, OrderStatus, Transition,
};
use rango_shared::StatusChangedEvent;
use rango_store::{Config, SeedData};
use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::session::CustomerSession;

/// Everything the three role views read from and mutate.
pub struct AppState {
    pub config: Config,
    pub directory: RestaurantDirectory,
    pub kitchen: KitchenBoard,
    pub dispatch: DispatchBoard,
    menus: HashMap<String, Menu>,
    courier_online: bool,
}

impl AppState {
    /// Load configuration and the configured seed.
    pub fn load() -> AppResult<Self> {
        let config = Config::load()?;
        let seed = SeedData::from_config(&config)?;
        Self::from_seed(config, seed)
    }

    pub fn from_seed(config: Config, seed: SeedData) -> AppResult<Self> {
        let policy = config.lifecycle.terminal_policy;
        let directory = RestaurantDirectory::new(seed.restaurants)?;

        let mut menus = HashMap::new();
        for seed_menu in seed.menus {
            directory.require(&seed_menu.restaurant_id)?;
            let menu = Menu::new(seed_menu.restaurant_id, seed_menu.items)?;
            menus.insert(menu.restaurant_id().to_string(), menu);
        }

        let kitchen = KitchenBoard::new(seed.restaurant_orders, policy)?;
        let dispatch = DispatchBoard::new(seed.deliveries, policy)?;
        let courier_online = config.courier.start_online;

        tracing::info!(
            "State ready: {} restaurants, {} menus, {} pending kitchen orders, terminal policy {:?}",
            directory.all().len(),
            menus.len(),
            kitchen.pending_count(),
            policy
        );

        Ok(Self {
            config,
            directory,
            kitchen,
            dispatch,
            menus,
            courier_online,
        })
    }

    pub fn menu(&self, restaurant_id: &str) -> AppResult<&Menu> {
        self.menus
            .get(restaurant_id)
            .ok_or_else(|| AppError::MenuMissing(restaurant_id.to_string()))
    }

    /// Start a fresh cart against one restaurant's menu.
    pub fn open_session(&self, restaurant_id: &str) -> AppResult<CustomerSession> {
        let restaurant = self.directory.require(restaurant_id)?.clone();
        let menu = self.menu(restaurant_id)?.clone();
        Ok(CustomerSession::new(restaurant, menu, self.config.currency.symbol.clone()))
    }

    pub fn courier_online(&self) -> bool {
        self.courier_online
    }

    pub fn set_courier_online(&mut self, online: bool) {
        if self.courier_online != online {
            tracing::info!("Courier is now {}", if online { "online" } else { "offline" });
        }
        self.courier_online = online;
    }

    pub fn advance_kitchen_order(&mut self, order_id: &str) -> AppResult<Transition<OrderStatus>> {
        Ok(self.kitchen.advance(order_id)?)
    }

    pub fn advance_delivery(&mut self, delivery_id: &str) -> AppResult<Transition<DeliveryStatus>> {
        Ok(self.dispatch.advance(delivery_id, self.courier_online)?)
    }

    pub fn available_deliveries(&self) -> Vec<&DeliveryOrder> {
        self.dispatch.available_orders(self.courier_online)
    }

    /// Drain both boards' status changes and log each one as JSON.
    pub fn publish_events(&mut self) -> Vec<StatusChangedEvent> {
        let mut events = self.kitchen.take_events();
        events.extend(self.dispatch.take_events());

        for event in &events {
            match serde_json::to_string(event) {
                Ok(payload) => tracing::info!("Status changed: {}", payload),
                Err(e) => tracing::error!("Failed to serialize event {}: {}", event.event_id, e),
            }
        }

        events
    }
}
