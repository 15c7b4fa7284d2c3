//! Shopping basket module.
//!
//! Contains the basket, its items and the snapshot published to views.

mod basket;

pub use basket::{Basket, BasketItem, BasketSnapshot};
