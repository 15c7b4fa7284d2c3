//! Storefront domain types and logic for the Web-larek shop.
//!
//! This crate is headless and synchronous. It owns everything that does not
//! need the network:
//!
//! - **Catalog**: products as listed by the shop API, category badges
//! - **Basket**: the purchase selection with a derived total and change
//!   notification
//! - **Checkout**: the step machine, form validation and order assembly
//! - **View**: presentation state for cards, the basket dialog and the
//!   success dialog
//!
//! # Example
//!
//! ```rust
//! use larek_commerce::prelude::*;
//!
//! let mut basket = Basket::new();
//! let counter = BasketCounter::new(&basket);
//!
//! basket.add(BasketItem::new("854cef69", "HEX-леденец", Some(Price::new(1450))));
//! assert_eq!(counter.count(), 1);
//! assert_eq!(basket.total().display(), "1450 синапсов");
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod view;

pub use basket::{Basket, BasketItem, BasketSnapshot};
pub use catalog::{CatalogPage, Category, Product};
pub use checkout::{CheckoutFlow, CheckoutStep, OrderConfirmation, OrderDraft, PaymentMethod};
pub use error::CommerceError;
pub use ids::*;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{CatalogPage, Category, Product};

    // Basket
    pub use crate::basket::{Basket, BasketItem, BasketSnapshot};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, ContactsForm, Field, FieldState, OrderConfirmation,
        OrderDraft, PaymentForm, PaymentMethod, Validity,
    };

    // View
    pub use crate::view::{
        BasketCounter, BasketLine, BasketListView, CheckoutDialogs, ClickTarget, ContactsView,
        Modal, PaymentView, ProductCardView, ProductDetailView, SuccessView,
    };
}
