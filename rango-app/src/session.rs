use rango_cart::{Cart, CheckoutSummary};
use rango_catalog::{Menu, Restaurant};
use rango_shared::money::format_amount;

use crate::error::AppResult;

/// A customer browsing one restaurant with a cart in progress.
pub struct CustomerSession {
    restaurant: Restaurant,
    menu: Menu,
    cart: Cart,
    currency_symbol: String,
}

impl CustomerSession {
    pub fn new(restaurant: Restaurant, menu: Menu, currency_symbol: impl Into<String>) -> Self {
        Self {
            restaurant,
            menu,
            cart: Cart::new(),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a menu item and return the new quantity.
    pub fn add(&mut self, item_id: &str) -> AppResult<u32> {
        let item = self.menu.require(item_id)?;
        self.cart.add_item(item);
        Ok(self.cart.quantity_of(item_id))
    }

    /// Remove one unit and return what is left. Unknown ids are ignored.
    pub fn remove(&mut self, item_id: &str) -> u32 {
        self.cart.remove_item(item_id);
        self.cart.quantity_of(item_id)
    }

    pub fn summary(&self) -> CheckoutSummary {
        self.cart.summary(self.restaurant.delivery_fee)
    }

    pub fn format_total(&self) -> String {
        format_amount(&self.currency_symbol, self.cart.total(self.restaurant.delivery_fee))
    }
}
