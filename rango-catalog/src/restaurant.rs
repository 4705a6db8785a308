use rango_shared::Amount;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rating: f32,
    /// Human-readable window, e.g. "25-35 min"
    pub delivery_time: String,
    pub delivery_fee: Amount,
    pub cuisine: String,
    pub distance_km: Amount,
    #[serde(default)]
    pub promoted: bool,
}

/// Restaurants visible to the customer plus the customer's favorites.
pub struct RestaurantDirectory {
    restaurants: Vec<Restaurant>,
    favorites: Vec<String>,
}

impl RestaurantDirectory {
    pub fn new(restaurants: Vec<Restaurant>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for restaurant in &restaurants {
            if !seen.insert(restaurant.id.as_str()) {
                return Err(CatalogError::DuplicateItem(restaurant.id.clone()));
            }
            if restaurant.delivery_fee < Amount::ZERO {
                return Err(CatalogError::NegativePrice(restaurant.id.clone()));
            }
        }

        Ok(Self {
            restaurants,
            favorites: Vec::new(),
        })
    }

    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn get(&self, restaurant_id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == restaurant_id)
    }

    pub fn require(&self, restaurant_id: &str) -> CatalogResult<&Restaurant> {
        self.get(restaurant_id)
            .ok_or_else(|| CatalogError::RestaurantNotFound(restaurant_id.to_string()))
    }

    /// Case-insensitive match of `term` against name or cuisine, narrowed to an
    /// exact `cuisine` when one is selected. An empty term matches everything.
    pub fn search(&self, term: &str, cuisine: Option<&str>) -> Vec<&Restaurant> {
        let needle = term.trim().to_lowercase();

        self.restaurants
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.name.to_lowercase().contains(&needle)
                    || r.cuisine.to_lowercase().contains(&needle)
            })
            .filter(|r| cuisine.map_or(true, |c| r.cuisine == c))
            .collect()
    }

    pub fn promoted(&self) -> Vec<&Restaurant> {
        self.restaurants.iter().filter(|r| r.promoted).collect()
    }

    /// Distinct cuisines in listing order
    pub fn cuisines(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.restaurants {
            if !out.contains(&r.cuisine.as_str()) {
                out.push(&r.cuisine);
            }
        }
        out
    }

    /// Flip the favorite flag for a restaurant and return the new state.
    pub fn toggle_favorite(&mut self, restaurant_id: &str) -> CatalogResult<bool> {
        self.require(restaurant_id)?;

        if let Some(pos) = self.favorites.iter().position(|id| id == restaurant_id) {
            self.favorites.remove(pos);
            tracing::debug!("Restaurant {} removed from favorites", restaurant_id);
            Ok(false)
        } else {
            self.favorites.push(restaurant_id.to_string());
            tracing::debug!("Restaurant {} added to favorites", restaurant_id);
            Ok(true)
        }
    }

    pub fn is_favorite(&self, restaurant_id: &str) -> bool {
        self.favorites.iter().any(|id| id == restaurant_id)
    }

    /// Favorites in the order they were marked.
    pub fn favorites(&self) -> Vec<&Restaurant> {
        self.favorites
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }
}
