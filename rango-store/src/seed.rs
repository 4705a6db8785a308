use rango_catalog::{MenuItem, Restaurant};
use rango_order::{DeliveryOrder, RestaurantOrder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::app_config::Config;
use crate::StoreResult;

const DEMO_SEED: &str = include_str!("../seed/demo.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMenu {
    pub restaurant_id: String,
    pub items: Vec<MenuItem>,
}

/// Static catalog plus the initial order collections for both boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub menus: Vec<SeedMenu>,
    #[serde(default)]
    pub restaurant_orders: Vec<RestaurantOrder>,
    #[serde(default)]
    pub deliveries: Vec<DeliveryOrder>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let seed = Self::from_json(&raw)?;
        tracing::info!(
            "Loaded seed from {}: {} restaurants, {} orders, {} deliveries",
            path.display(),
            seed.restaurants.len(),
            seed.restaurant_orders.len(),
            seed.deliveries.len()
        );
        Ok(seed)
    }

    /// The bundled demo data set
    pub fn demo() -> StoreResult<Self> {
        Self::from_json(DEMO_SEED)
    }

    /// Seed named by the configuration, falling back to the demo set.
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        match &config.seed.path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No seed path configured; using bundled demo seed");
                Self::demo()
            }
        }
    }

    pub fn menu_for(&self, restaurant_id: &str) -> Option<&SeedMenu> {
        self.menus.iter().find(|m| m.restaurant_id == restaurant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rango_order::{DeliveryStatus, OrderStatus};
    use rust_decimal::Decimal;

    #[test]
    fn test_demo_seed_parses() {
        let seed = SeedData::demo().unwrap();

        assert_eq!(seed.restaurants.len(), 6);
        assert_eq!(seed.restaurant_orders.len(), 4);
        assert_eq!(seed.deliveries.len(), 3);

        let menu = seed.menu_for("1").unwrap();
        assert_eq!(menu.items.len(), 6);
        assert_eq!(menu.items[0].price, Decimal::new(2890, 2));
    }

    #[test]
    fn test_demo_statuses() {
        let seed = SeedData::demo().unwrap();

        let statuses: Vec<OrderStatus> = seed.restaurant_orders.iter().map(|o| o.status).collect();
        assert_eq!(statuses, vec![
            OrderStatus::New,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Dispatched,
        ]);
        assert_eq!(seed.deliveries[2].status, DeliveryStatus::PickedUp);
        assert_eq!(seed.deliveries[0].customer_phone.expose(), "(11) 99999-1234");
    }

    #[test]
    fn test_rejects_unknown_status() {
        let raw = r#"{
            "restaurants": [],
            "restaurant_orders": [{
                "id": "x", "customer_name": "a", "items": [], "total": "1.00",
                "status": "cooking", "order_time": "10:00:00", "estimated_minutes": 5
            }]
        }"#;
        assert!(matches!(SeedData::from_json(raw), Err(crate::StoreError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = SeedData::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, crate::StoreError::Io(_)));
    }
}
