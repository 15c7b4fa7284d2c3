//! Product catalog module.
//!
//! Contains the product, category and listing types.

mod product;

pub use product::{CatalogPage, Category, Product};
