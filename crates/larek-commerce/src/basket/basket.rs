//! Basket and basket item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// A product as it sits in the basket.
///
/// The price is copied when the item is added, so later catalog changes do
/// not affect a standing basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketItem {
    /// Product identifier.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price at add time; `None` for priceless products.
    pub price: Option<Price>,
}

impl BasketItem {
    /// Create a new basket item.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Option<Price>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
        }
    }

    /// Price rendered for display.
    pub fn price_label(&self) -> String {
        Price::label(self.price)
    }
}

impl From<&Product> for BasketItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
        }
    }
}

/// Immutable view of the basket published after every mutation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BasketSnapshot {
    /// Items in insertion order.
    pub items: Vec<BasketItem>,
    /// Sum of item prices, priceless items counting as zero.
    pub total: Price,
    /// Incremented on every published change.
    pub revision: u64,
}

impl BasketSnapshot {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Identifiers of the items in display order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|i| i.id.clone()).collect()
    }
}

/// The shopping basket.
///
/// A single instance is created per session and handed by reference to every
/// component that reads or mutates it. Views do not poll the basket; they hold
/// a receiver from [`Basket::subscribe`] and always see the latest snapshot.
#[derive(Debug)]
pub struct Basket {
    items: Vec<BasketItem>,
    total: Price,
    revision: u64,
    changes: watch::Sender<BasketSnapshot>,
}

impl Basket {
    /// Create an empty basket.
    pub fn new() -> Self {
        let (changes, _) = watch::channel(BasketSnapshot::default());
        Self {
            items: Vec::new(),
            total: Price::zero(),
            revision: 0,
            changes,
        }
    }

    /// Add an item to the end of the basket.
    ///
    /// The basket holds at most one entry per product; adding a product that
    /// is already present changes nothing and returns `false`.
    pub fn add(&mut self, item: BasketItem) -> bool {
        if self.contains(&item.id) {
            debug!(product_id = %item.id, "product already in basket");
            return false;
        }

        debug!(product_id = %item.id, price = ?item.price, "adding to basket");
        self.items.push(item);
        self.recalculate();
        true
    }

    /// Remove the item with the given identifier.
    ///
    /// Unknown identifiers are ignored. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.items.iter().position(|i| &i.id == id) else {
            return false;
        };

        debug!(product_id = %id, "removing from basket");
        self.items.remove(index);
        self.recalculate();
        true
    }

    /// Empty the basket and zero the total.
    pub fn clear(&mut self) {
        debug!(items = self.items.len(), "clearing basket");
        self.items.clear();
        self.recalculate();
    }

    /// Check whether a product is in the basket.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Current total.
    pub fn total(&self) -> Price {
        self.total
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Identifiers of the items in insertion order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|i| i.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a view. The receiver starts at the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<BasketSnapshot> {
        self.changes.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> BasketSnapshot {
        BasketSnapshot {
            items: self.items.clone(),
            total: self.total,
            revision: self.revision,
        }
    }

    /// Recompute the total from scratch and publish the new state.
    fn recalculate(&mut self) {
        self.total = Price::total_of(self.items.iter().map(|i| i.price));
        self.revision += 1;
        self.changes.send_replace(self.snapshot());
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}
