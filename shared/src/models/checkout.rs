//! Checkout Processing Payloads

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::order::OrderStatus;

/// Line reference submitted for inventory validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Full checkout payload (`POST /api/checkout/process`)
///
/// When the shopper chose "billing same as shipping" the client substitutes
/// the shipping address here; the overridden billing stub is never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub shipping_address: Address,
    pub billing_address: Address,
    pub items: Vec<CheckoutItem>,
    pub is_gift: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    pub gift_wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    /// Opaque payment token collected by the payment form
    pub payment_method: String,
}

/// Order confirmation returned by checkout processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub order_id: i64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
