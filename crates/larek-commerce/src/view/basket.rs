//! Basket counter badge and basket dialog.

use tokio::sync::watch;

use crate::basket::{Basket, BasketSnapshot};
use crate::ids::ProductId;
use crate::view::Modal;

/// The item counter on the header basket icon.
#[derive(Debug, Clone)]
pub struct BasketCounter {
    basket: watch::Receiver<BasketSnapshot>,
}

impl BasketCounter {
    pub fn new(basket: &Basket) -> Self {
        Self {
            basket: basket.subscribe(),
        }
    }

    pub fn count(&self) -> usize {
        self.basket.borrow().len()
    }

    pub fn label(&self) -> String {
        self.count().to_string()
    }
}

/// One rendered row of the basket list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketLine {
    /// 1-based position shown next to the title.
    pub index: usize,
    pub id: ProductId,
    pub title: String,
    pub price_label: String,
}

/// The basket dialog: item list, total and "place order" button.
#[derive(Debug, Clone)]
pub struct BasketListView {
    modal: Modal,
    basket: watch::Receiver<BasketSnapshot>,
}

impl BasketListView {
    pub fn new(basket: &Basket) -> Self {
        Self {
            modal: Modal::new("basket"),
            basket: basket.subscribe(),
        }
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub fn lines(&self) -> Vec<BasketLine> {
        self.basket
            .borrow()
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| BasketLine {
                index: i + 1,
                id: item.id.clone(),
                title: item.title.clone(),
                price_label: item.price_label(),
            })
            .collect()
    }

    pub fn total_label(&self) -> String {
        self.basket.borrow().total.display()
    }

    pub fn order_button_enabled(&self) -> bool {
        !self.basket.borrow().is_empty()
    }

    /// Revision of the snapshot this view last saw.
    pub fn revision(&self) -> u64 {
        self.basket.borrow().revision
    }
}
