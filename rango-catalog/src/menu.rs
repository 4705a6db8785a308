use rango_shared::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{CatalogError, CatalogResult};

/// Fixed set of menu sections
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Burgers,
    Sides,
    Drinks,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [MenuCategory::Burgers, MenuCategory::Sides, MenuCategory::Drinks];
}

/// Immutable catalog entry. Loaded once from the seed and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Amount,
    pub category: MenuCategory,
    pub image: String,
}

/// A restaurant's menu, in the order the restaurant lists it.
#[derive(Debug, Clone, Serialize)]
pub struct Menu {
    restaurant_id: String,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu, rejecting duplicate ids and negative prices.
    pub fn new(restaurant_id: impl Into<String>, items: Vec<MenuItem>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
            if item.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(item.id.clone()));
            }
        }

        let restaurant_id = restaurant_id.into();
        tracing::debug!("Loaded menu for restaurant {} with {} items", restaurant_id, items.len());

        Ok(Self { restaurant_id, items })
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Same as [`Menu::get`] but treats absence as an error.
    pub fn require(&self, item_id: &str) -> CatalogResult<&MenuItem> {
        self.get(item_id)
            .ok_or_else(|| CatalogError::ItemNotFound(item_id.to_string()))
    }

    /// Items in one category, or every item when `category` is `None`.
    pub fn by_category(&self, category: Option<MenuCategory>) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect()
    }

    /// Categories that have at least one item, in declaration order.
    pub fn categories(&self) -> Vec<MenuCategory> {
        MenuCategory::ALL
            .into_iter()
            .filter(|c| self.items.iter().any(|item| item.category == *c))
            .collect()
    }
}
