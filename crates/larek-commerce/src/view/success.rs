//! Order success dialog.

use crate::price::Price;
use crate::view::Modal;

/// Confirmation shown after the order is accepted.
#[derive(Debug, Clone)]
pub struct SuccessView {
    modal: Modal,
    charged: Price,
}

impl SuccessView {
    pub fn new() -> Self {
        Self {
            modal: Modal::new("success"),
            charged: Price::default(),
        }
    }

    /// Open the dialog for an accepted order.
    pub fn show(&mut self, charged: Price) {
        self.charged = charged;
        self.modal.open();
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub fn charged(&self) -> Price {
        self.charged
    }

    pub fn message(&self) -> String {
        format!("Списано {}", self.charged.display())
    }
}

impl Default for SuccessView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let mut view = SuccessView::new();
        assert!(!view.modal().is_open());

        view.show(Price::new(2200));
        assert_eq!(view.message(), "Списано 2200 синапсов");
        assert!(view.modal().is_open());
    }
}
