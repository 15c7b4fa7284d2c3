//! Headless view models.
//!
//! Views render core state into display strings and relay user actions back
//! into the core. Basket-backed views hold a subscription receiver and never
//! need to be refreshed by hand.

mod basket;
mod card;
mod modal;
mod steps;
mod success;

pub use basket::{BasketCounter, BasketLine, BasketListView};
pub use card::{ProductCardView, ProductDetailView, ADD_LABEL, REMOVE_LABEL};
pub use modal::{ClickTarget, Modal};
pub use steps::{CheckoutDialogs, ContactsView, PaymentView};
pub use success::SuccessView;
