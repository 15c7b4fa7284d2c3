//! Catalog card and product detail views.

use tokio::sync::watch;

use crate::basket::{Basket, BasketItem, BasketSnapshot};
use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::view::Modal;

/// Detail action label when the product is not in the basket.
pub const ADD_LABEL: &str = "Купить";
/// Detail action label when the product is in the basket.
pub const REMOVE_LABEL: &str = "Убрать";

/// A product tile in the catalog gallery.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    product: Product,
    cdn_url: String,
}

impl ProductCardView {
    pub fn new(product: Product, cdn_url: impl Into<String>) -> Self {
        Self {
            product,
            cdn_url: cdn_url.into(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn title(&self) -> &str {
        &self.product.title
    }

    pub fn category(&self) -> &str {
        &self.product.category
    }

    pub fn category_kind(&self) -> Category {
        self.product.category_kind()
    }

    pub fn price_label(&self) -> String {
        self.product.price_label()
    }

    pub fn image_url(&self) -> String {
        self.product.image_url(&self.cdn_url)
    }
}

/// The product preview dialog with its buy/remove action.
#[derive(Debug)]
pub struct ProductDetailView {
    card: ProductCardView,
    modal: Modal,
    basket: watch::Receiver<BasketSnapshot>,
}

impl ProductDetailView {
    pub fn new(card: ProductCardView, basket: &Basket) -> Self {
        Self {
            card,
            modal: Modal::new("card-preview"),
            basket: basket.subscribe(),
        }
    }

    pub fn card(&self) -> &ProductCardView {
        &self.card
    }

    pub fn description(&self) -> &str {
        &self.card.product.description
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub fn in_basket(&self) -> bool {
        self.basket.borrow().contains(&self.card.product.id)
    }

    /// Whether the action button is enabled. Priceless products can never be
    /// bought.
    pub fn action_enabled(&self) -> bool {
        self.card.product.is_purchasable()
    }

    pub fn action_label(&self) -> &'static str {
        if self.in_basket() {
            REMOVE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Put the product in the basket, or take it out if it is already there.
    ///
    /// Returns whether the product is in the basket afterwards.
    /// Priceless products are refused with [`CommerceError::NotPurchasable`]
    /// and the basket is left untouched.
    pub fn toggle(&self, basket: &mut Basket) -> Result<bool, CommerceError> {
        let product = &self.card.product;
        if basket.contains(&product.id) {
            basket.remove(&product.id);
            return Ok(false);
        }
        if !product.is_purchasable() {
            return Err(CommerceError::NotPurchasable(product.id.clone()));
        }
        basket.add(BasketItem::from(product));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::price::Price;

    const CDN: &str = "https://cdn.example.com/content/weblarek";

    fn product(id: &str, price: Option<u64>) -> Product {
        Product {
            id: ProductId::new(id),
            title: "HEX-леденец".to_string(),
            description: "Лизните этот леденец, чтобы мгновенно запоминать цвета.".to_string(),
            image: "/Shell.svg".to_string(),
            category: "другое".to_string(),
            price: price.map(Price::new),
        }
    }

    #[test]
    fn test_card_rendering() {
        let card = ProductCardView::new(product("1", Some(1450)), CDN);
        assert_eq!(card.price_label(), "1450 синапсов");
        assert_eq!(card.category_kind(), Category::Other);
        assert_eq!(card.image_url(), format!("{CDN}/Shell.svg"));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut basket = Basket::new();
        let detail = ProductDetailView::new(
            ProductCardView::new(product("1", Some(1450)), CDN),
            &basket,
        );
        assert_eq!(detail.action_label(), ADD_LABEL);

        assert_eq!(detail.toggle(&mut basket), Ok(true));
        assert_eq!(detail.action_label(), REMOVE_LABEL);
        assert_eq!(basket.total(), Price::new(1450));

        assert_eq!(detail.toggle(&mut basket), Ok(false));
        assert_eq!(detail.action_label(), ADD_LABEL);
        assert!(basket.is_empty());
    }

    #[test]
    fn test_priceless_product_cannot_be_bought() {
        let mut basket = Basket::new();
        let detail =
            ProductDetailView::new(ProductCardView::new(product("p", None), CDN), &basket);

        assert!(!detail.action_enabled());
        assert_eq!(
            detail.toggle(&mut basket),
            Err(CommerceError::NotPurchasable(ProductId::new("p")))
        );
        assert!(basket.is_empty());
    }

    #[test]
    fn test_label_follows_changes_made_elsewhere() {
        let mut basket = Basket::new();
        let detail = ProductDetailView::new(
            ProductCardView::new(product("1", Some(100)), CDN),
            &basket,
        );

        // The basket dialog removes the item, not the detail view.
        basket.add(BasketItem::from(detail.card().product()));
        assert_eq!(detail.action_label(), REMOVE_LABEL);
        basket.remove(&ProductId::new("1"));
        assert_eq!(detail.action_label(), ADD_LABEL);
    }
}
