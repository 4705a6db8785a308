use rango_catalog::MenuItem;
use rango_shared::Amount;
use serde::Serialize;

/// One catalog item plus the quantity picked. Quantity is always at least 1;
/// a line that would drop to zero is removed from the cart instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn line_total(&self) -> Amount {
        self.item.price * Amount::from(self.quantity)
    }
}

/// Amounts handed to a checkout collaborator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutSummary {
    pub item_count: u32,
    pub subtotal: Amount,
    pub delivery_fee: Amount,
    pub total: Amount,
}

/// In-progress order for a single customer. Lines keep the order in which
/// items were first added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the line for this item, creating it with quantity 1 if absent.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                tracing::debug!("Cart line {} increased to {}", item.id, line.quantity);
            }
            None => {
                self.lines.push(CartLine::new(item.clone()));
                tracing::debug!("Cart line {} created", item.id);
            }
        }
    }

    /// Decrement the line for `item_id`, dropping it when the quantity reaches zero.
    /// Removing something that is not in the cart does nothing.
    pub fn remove_item(&mut self, item_id: &str) {
        let Some(pos) = self.lines.iter().position(|line| line.item.id == item_id) else {
            tracing::debug!("Ignoring removal of {}: not in cart", item_id);
            return;
        };

        if self.lines[pos].quantity > 1 {
            self.lines[pos].quantity -= 1;
            tracing::debug!("Cart line {} decreased to {}", item_id, self.lines[pos].quantity);
        } else {
            self.lines.remove(pos);
            tracing::debug!("Cart line {} removed", item_id);
        }
    }

    /// Current quantity, 0 when the item is not in the cart.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item.id == item_id)
            .map_or(0, |line| line.quantity)
    }

    pub fn subtotal(&self) -> Amount {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units, not number of lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self, delivery_fee: Amount) -> Amount {
        self.subtotal() + delivery_fee
    }

    pub fn summary(&self, delivery_fee: Amount) -> CheckoutSummary {
        CheckoutSummary {
            item_count: self.item_count(),
            subtotal: self.subtotal(),
            delivery_fee,
            total: self.total(delivery_fee),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
