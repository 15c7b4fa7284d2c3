//! Order payload types.

use crate::basket::Basket;
use crate::ids::{OrderId, ProductId};
use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Pay online at checkout.
    #[serde(rename = "online")]
    Online,
    /// Pay the courier on delivery.
    #[serde(rename = "onDelivery")]
    OnDelivery,
}

impl PaymentMethod {
    /// Wire value sent to the order endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "online",
            PaymentMethod::OnDelivery => "onDelivery",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "Online",
            PaymentMethod::OnDelivery => "On delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(PaymentMethod::Online),
            "ondelivery" | "on-delivery" | "on_delivery" | "cash" => Ok(PaymentMethod::OnDelivery),
            other => Err(format!(
                "unknown payment method '{other}', expected 'online' or 'on-delivery'"
            )),
        }
    }
}

/// The payload submitted to the order endpoint.
///
/// Built once, at the moment the contacts step is submitted, from the basket
/// and the validated form values. It keeps no reference to its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub payment: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: Price,
    pub items: Vec<ProductId>,
}

impl OrderDraft {
    /// Assemble the payload from the basket and the checkout inputs.
    ///
    /// Performs no validation; the checkout flow only calls this once every
    /// field has passed.
    pub fn assemble(
        basket: &Basket,
        payment: PaymentMethod,
        address: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            payment,
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            total: basket.total(),
            items: basket.ids(),
        }
    }

    /// Serialize to the JSON body sent over the wire.
    pub fn to_json(&self) -> Result<String, crate::CommerceError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What the order endpoint returns on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderConfirmation {
    /// Server-assigned order identifier.
    #[serde(default)]
    pub id: Option<OrderId>,
    /// Amount the server charged.
    #[serde(default)]
    pub total: Option<Price>,
}
