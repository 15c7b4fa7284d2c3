//! Product and category types.

use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Category classification of a product.
///
/// The catalog sends categories as free-form labels; the known ones map to a
/// variant and everything else is kept as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Soft,
    Hard,
    Button,
    Additional,
    Other,
    Unknown,
}

impl Category {
    /// Classify a category label from the catalog.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "софт-скил" => Category::Soft,
            "хард-скил" => Category::Hard,
            "кнопка" => Category::Button,
            "дополнительное" => Category::Additional,
            "другое" => Category::Other,
            _ => Category::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Soft => "soft",
            Category::Hard => "hard",
            Category::Button => "button",
            Category::Additional => "additional",
            Category::Other => "other",
            Category::Unknown => "unknown",
        }
    }
}

/// A product in the catalog.
///
/// Products are immutable once fetched and live for the whole session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Image path relative to the CDN root.
    #[serde(default)]
    pub image: String,
    /// Category label as sent by the API.
    #[serde(default)]
    pub category: String,
    /// Price; `None` means the product cannot be bought.
    pub price: Option<Price>,
}

impl Product {
    /// Check if the product can be put in the basket.
    pub fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }

    /// Classified category.
    pub fn category_kind(&self) -> Category {
        Category::from_label(&self.category)
    }

    /// Absolute image URL under the given CDN root.
    pub fn image_url(&self, cdn_url: &str) -> String {
        format!("{}{}", cdn_url.trim_end_matches('/'), self.image)
    }

    /// Price rendered for display.
    pub fn price_label(&self) -> String {
        Price::label(self.price)
    }
}

/// One page of the product listing, as returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogPage {
    /// Total number of products known to the server.
    pub total: u64,
    /// Products in this page.
    pub items: Vec<Product>,
}

impl CatalogPage {
    /// An empty catalog, used whenever the listing cannot be fetched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a product by identifier.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|p| &p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
