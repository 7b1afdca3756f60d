//! Cart Model
//!
//! The cart is the only mutable state the storefront holds outside the
//! rendered UI. It lives for the duration of one session and is never
//! persisted. Every mutation re-establishes the invariant that `total`
//! equals the sum of the item prices.

use serde::{Deserialize, Serialize};

/// One selected order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Option<i64>,
    pub name: String,
    /// Price in dollars
    pub price: f64,
}

impl CartItem {
    pub fn new(id: Option<i64>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// In-memory order with a running total
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    total: f64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running total in dollars
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Append an item and grow the total by its price
    pub fn add_item(&mut self, item: CartItem) {
        self.total += item.price;
        self.items.push(item);
    }

    /// Remove the item at `index`, shrinking the total by its price.
    ///
    /// Out-of-range indices are a no-op and return `None`; the caller
    /// decides whether that is worth reporting.
    pub fn remove_item(&mut self, index: usize) -> Option<CartItem> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.total -= item.price;
        Some(item)
    }

    /// Empty the cart and zero the total
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0.0;
    }
}
